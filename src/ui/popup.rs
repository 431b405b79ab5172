/// Popup UI: shows the page being saved and the flow's status

use crate::bridge::{self, ChromeBrowser, FetchClient, GlooSleeper};
use crate::flow::SaveFlow;
use crate::platform::StatusView;
use crate::status::Status;
use crate::ui::components::StatusBanner;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Status port backed by the component's state hooks
#[derive(Clone)]
struct PopupView {
    status: UseStateHandle<Status>,
    title: UseStateHandle<String>,
}

impl StatusView for PopupView {
    fn render(&self, status: Status) {
        self.status.set(status);
    }

    fn show_page_title(&self, title: &str) {
        self.title.set(title.to_string());
    }
}

type PopupFlow = SaveFlow<ChromeBrowser, FetchClient, GlooSleeper, PopupView>;

fn popup_flow(view: PopupView) -> PopupFlow {
    SaveFlow::new(bridge::load_config(), ChromeBrowser, FetchClient, GlooSleeper, view)
}

#[function_component(App)]
pub fn app() -> Html {
    let status = use_state(|| Status::loading("Loading..."));
    let title = use_state(String::new);

    // One flow per popup; it refuses a second login while one is waiting
    let flow = {
        let view = PopupView {
            status: status.clone(),
            title: title.clone(),
        };
        use_memo((), move |_| popup_flow(view))
    };

    // Check the session and save on mount
    {
        let flow = flow.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let outcome = flow.run().await;
                log::debug!("Popup flow ended: {:?}", outcome);
            });
            || ()
        });
    }

    let on_login = {
        let flow = flow.clone();

        Callback::from(move |_: MouseEvent| {
            let flow = flow.clone();
            spawn_local(async move {
                let outcome = flow.login().await;
                log::debug!("Login flow ended: {:?}", outcome);
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Save Article"}</h1>
            <p id="pageTitle" class="page-title">{(*title).clone()}</p>
            <StatusBanner status={(*status).clone()} on_login={on_login} />
        </div>
    }
}
