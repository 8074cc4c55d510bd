use crate::analyzer::api::{analysis_history, upload_screenshot};
use crate::analyzer::components::{AnalysisResultPanel, RecentAnalyses, UploadDropzone};
use crate::analyzer::models::AnalysisResult;
use crate::analyzer::workflow::{AnalysisStatus, AnalysisWorkflow, FileMeta};
use crate::api_client::ValidationError;
use crate::components::{ErrorMessage, Footer, PageHeader, Spinner};
use crate::router::Route;
use web_sys::File;
use yew::prelude::*;

const HISTORY_SIZE: u32 = 5;

#[function_component(AnalyzerPage)]
pub fn analyzer_page() -> Html {
    let workflow = use_mut_ref(AnalysisWorkflow::new);
    let update = use_force_update();
    let history = use_state(Vec::<AnalysisResult>::new);

    {
        let history = history.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match analysis_history(0, HISTORY_SIZE).await {
                    Ok(analyses) => history.set(analyses),
                    Err(e) => log::warn!("Failed to load analysis history: {}", e),
                }
            });
            || ()
        });
    }

    let on_files = {
        let workflow = workflow.clone();
        let update = update.clone();
        Callback::from(move |files: Vec<File>| {
            let file = match files.as_slice() {
                [] => return,
                [file] => file.clone(),
                _ => {
                    workflow.borrow_mut().reject(ValidationError::MultipleFiles);
                    update.force_update();
                    return;
                }
            };

            let ticket = workflow.borrow_mut().submit(FileMeta::from_file(&file));
            update.force_update();

            if let Some(ticket) = ticket {
                let workflow = workflow.clone();
                let update = update.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = upload_screenshot(&file).await;
                    if workflow.borrow_mut().finish(ticket, outcome) {
                        update.force_update();
                    }
                });
            }
        })
    };

    let workflow = workflow.borrow();

    let status_view = match workflow.status() {
        AnalysisStatus::Idle => html! {},
        AnalysisStatus::Validating | AnalysisStatus::Uploading => html! {
            <div class="mt-8 flex flex-col items-center justify-center">
                <Spinner color="border-blue-600" />
                <p class="text-gray-600">
                    { match workflow.file() {
                        Some(file) => format!("Analyzing {}...", file.name),
                        None => "Analyzing your Pokemon...".to_string(),
                    } }
                </p>
            </div>
        },
        AnalysisStatus::Succeeded(analysis) => html! {
            <div class="mt-8">
                <AnalysisResultPanel analysis={analysis.clone()} />
            </div>
        },
        AnalysisStatus::Failed(message) => html! {
            <div class="mt-6">
                <ErrorMessage error_message={Some(message.clone())} />
            </div>
        },
    };

    html! {
        <div class="min-h-screen bg-gradient-to-b from-blue-50 to-white">
            <PageHeader
                icon="🔍"
                title="IV Analyzer"
                subtitle="Analyze your Pokemon screenshots"
                active={Route::Analyzer}
                theme="bg-blue-600"
            />

            <main class="container mx-auto px-4 py-8 max-w-4xl">
                <div class="mb-8">
                    <h2 class="text-2xl font-bold text-gray-800 mb-2">{"Upload a Pokemon screenshot"}</h2>
                    <p class="text-gray-600">
                        {"Upload the info screen of a Pokemon to analyze its individual values"}
                    </p>
                </div>

                <UploadDropzone on_files={on_files} />

                <section aria-live="polite" aria-busy={workflow.is_busy().to_string()}>
                    { status_view }
                </section>

                <div class="mt-12 bg-yellow-50 border border-yellow-200 rounded-lg p-6">
                    <h3 class="text-lg font-bold text-gray-800 mb-3">{"💡 How to use"}</h3>
                    <ol class="list-decimal list-inside space-y-2 text-gray-700">
                        <li>{"Open Pokemon GO and go to your Pokemon collection"}</li>
                        <li>{"Select a Pokemon and take a screenshot of its info screen"}</li>
                        <li>{"Upload the screenshot here"}</li>
                        <li>{"Review the IV breakdown and recommendations"}</li>
                    </ol>
                    <p class="text-sm text-gray-600 mt-4">
                        {"The screenshot is read with OCR, so make sure the CP, HP and name are clearly visible."}
                    </p>
                </div>

                <RecentAnalyses analyses={(*history).clone()} />
            </main>

            <Footer />
        </div>
    }
}
