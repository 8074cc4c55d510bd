use crate::subscription::api::send;
use crate::subscription::form::{MessageKind, SubscriptionForm, SubscriptionRequest};
use crate::request_sequence::RequestTicket;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn spawn_request(
    form: Rc<RefCell<SubscriptionForm>>,
    update: UseForceUpdateHandle,
    started: Option<(RequestTicket, SubscriptionRequest)>,
) {
    update.force_update();
    let Some((ticket, request)) = started else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = send(&request).await;
        if form.borrow_mut().finish(ticket, outcome) {
            update.force_update();
        }
    });
}

#[function_component(SubscriptionPanel)]
pub fn subscription_panel() -> Html {
    let form = use_mut_ref(SubscriptionForm::new);
    let update = use_force_update();

    let on_input = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().set_input(input.value());
            update.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = form.borrow().input().to_string();
            let started = form.borrow_mut().begin_submit(&input);
            spawn_request(form.clone(), update.clone(), started);
        })
    };

    let on_unsubscribe = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            let started = form.borrow_mut().begin_unsubscribe();
            spawn_request(form.clone(), update.clone(), started);
        })
    };

    let on_start_editing = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            form.borrow_mut().start_editing();
            update.force_update();
        })
    };

    let on_cancel = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            form.borrow_mut().cancel_editing();
            update.force_update();
        })
    };

    let form = form.borrow();
    let busy = form.is_busy();

    let submit_label = if busy {
        "Working..."
    } else if form.is_editing() {
        "Change email"
    } else {
        "Subscribe"
    };

    let body = match form.current_email() {
        Some(current) if !form.shows_input() => html! {
            <div class="text-center space-y-4">
                <div class="bg-green-100 border border-green-300 text-green-800 px-4 py-3 rounded-lg">
                    <p class="font-semibold">{ format!("Subscribed: {}", current) }</p>
                </div>
                <div class="flex justify-center gap-2">
                    <button onclick={on_start_editing} disabled={busy}
                            class="px-6 py-2 bg-gray-200 text-gray-700 font-semibold rounded-lg hover:bg-gray-300 transition">
                        {"Change email"}
                    </button>
                    <button onclick={on_unsubscribe} disabled={busy}
                            class="px-6 py-2 bg-white text-red-600 border border-red-300 font-semibold rounded-lg hover:bg-red-50 transition">
                        {"Unsubscribe"}
                    </button>
                </div>
            </div>
        },
        _ => html! {
            <form onsubmit={on_submit} class="space-y-4">
                <div class="flex flex-col sm:flex-row gap-3">
                    <input type="email"
                           value={form.input().to_string()}
                           oninput={on_input}
                           placeholder="Enter your email address"
                           disabled={busy}
                           class="flex-1 px-4 py-3 rounded-lg border-2 border-gray-300 focus:border-blue-600 focus:outline-none" />
                    <button type="submit" disabled={busy}
                            class="px-6 py-3 bg-blue-600 text-white font-semibold rounded-lg hover:bg-blue-700 transition disabled:opacity-50 disabled:cursor-not-allowed">
                        { submit_label }
                    </button>
                    {
                        if form.is_editing() {
                            html! {
                                <button type="button" onclick={on_cancel}
                                        class="px-4 py-3 bg-gray-300 text-gray-700 font-semibold rounded-lg hover:bg-gray-400 transition">
                                    {"Cancel"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </form>
        },
    };

    let message = match form.message() {
        Some(message) => {
            let class = match message.kind {
                MessageKind::Success => "mt-4 px-4 py-3 rounded-lg bg-green-100 border border-green-400 text-green-700",
                MessageKind::Error => "mt-4 px-4 py-3 rounded-lg bg-red-100 border border-red-400 text-red-700",
            };
            html! { <div {class}>{ &message.text }</div> }
        }
        None => html! {},
    };

    html! {
        <div class="bg-gradient-to-r from-blue-50 to-purple-50 rounded-lg p-8 shadow-lg">
            <div class="max-w-2xl mx-auto">
                <div class="text-center mb-6">
                    <h3 class="text-2xl font-bold text-gray-800 mb-2">
                        <span class="text-3xl mr-2">{"📧"}</span>
                        {"Email alerts"}
                    </h3>
                    <p class="text-gray-600">{"Get new Pokemon GO event news by email"}</p>
                </div>
                { body }
                { message }
                <div class="mt-6 text-xs text-gray-500 text-center">
                    <p>{"No spam. Unsubscribe at any time."}</p>
                </div>
            </div>
        </div>
    }
}
