use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Simulated typing delay before the assistant reply appears.
const REPLY_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, PartialEq)]
struct Message {
    id: u32,
    role: Role,
    text: String,
    timestamp: String,
}

/// The conversation log. Held in a reducer so delayed assistant replies
/// append to the latest log rather than a stale snapshot, keeping
/// replies in submission order.
#[derive(Clone, PartialEq)]
struct ChatLog {
    messages: Vec<Message>,
    next_id: u32,
}

enum ChatAction {
    Push { role: Role, text: String },
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![Message {
                id: 0,
                role: Role::System,
                text: chat::WELCOME.to_string(),
                timestamp: now(),
            }],
            next_id: 1,
        }
    }
}

impl Reducible for ChatLog {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Push { role, text } => {
                next.messages.push(Message {
                    id: next.next_id,
                    role,
                    text,
                    timestamp: now(),
                });
                next.next_id += 1;
            }
        }
        Rc::new(next)
    }
}

fn now() -> String {
    js_sys::Date::new_0().to_locale_time_string("en-US").into()
}

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let log = use_reducer(ChatLog::default);
    let input_ref = use_node_ref();
    let end_ref = use_node_ref();

    // Keep the newest message in view.
    {
        let end_ref = end_ref.clone();
        use_effect_with(log.messages.len(), move |_| {
            if let Some(element) = end_ref.cast::<web_sys::Element>() {
                element.scroll_into_view();
            }
            || ()
        });
    }

    let onsubmit = {
        let log = log.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let text = input.value();
            let text = text.trim().to_string();
            if text.is_empty() {
                return;
            }
            input.set_value("");

            log.dispatch(ChatAction::Push {
                role: Role::User,
                text: text.clone(),
            });

            let log = log.clone();
            Timeout::new(REPLY_DELAY_MS, move || {
                log.dispatch(ChatAction::Push {
                    role: Role::Assistant,
                    text: chat::respond(&text),
                });
            })
            .forget();
        })
    };

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow flex flex-col h-96">
            <div class="px-4 py-2 border-b border-gray-200 dark:border-gray-700 font-semibold text-sm">
                { "Data Assistant" }
            </div>
            <div class="flex-1 overflow-y-auto p-4 space-y-3">
                { for log.messages.iter().map(message_bubble) }
                <div ref={end_ref}></div>
            </div>
            <form {onsubmit} class="p-3 border-t border-gray-200 dark:border-gray-700 flex gap-2">
                <input
                    ref={input_ref}
                    type="text"
                    placeholder="Ask about inequality data..."
                    class="flex-1 text-sm rounded-md border border-gray-300 dark:border-gray-600 bg-transparent px-3 py-2"
                />
                <button
                    type="submit"
                    class="px-4 py-2 text-sm rounded-md bg-indigo-600 text-white hover:bg-indigo-700"
                >
                    { "Send" }
                </button>
            </form>
        </div>
    }
}

fn message_bubble(message: &Message) -> Html {
    let (wrapper, bubble) = match message.role {
        Role::User => (
            "flex justify-end",
            "max-w-[80%] rounded-lg px-3 py-2 text-sm bg-indigo-600 text-white",
        ),
        Role::Assistant => (
            "flex justify-start",
            "max-w-[80%] rounded-lg px-3 py-2 text-sm bg-gray-100 dark:bg-gray-700",
        ),
        Role::System => (
            "flex justify-center",
            "max-w-[90%] rounded-lg px-3 py-2 text-xs text-gray-500 dark:text-gray-400 bg-gray-50 dark:bg-gray-700/50",
        ),
    };

    html! {
        <div key={message.id} class={wrapper}>
            <div class={bubble}>
                <p>{ &message.text }</p>
                <div class="text-[10px] opacity-60 mt-1">{ &message.timestamp }</div>
            </div>
        </div>
    }
}
