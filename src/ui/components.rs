/// Reusable UI components

use crate::status::{Status, StatusKind};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub status: Status,
    #[prop_or_default]
    pub on_login: Callback<MouseEvent>,
}

/// The status region. Its class is `status <kind>` so the popup stylesheet can
/// color it.
#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    let status = &props.status;

    let body = match status.kind {
        StatusKind::Loading => html! {
            <div class="loading-text-center">
                <Spinner />
                <p class="loading-text">{&status.message}</p>
            </div>
        },
        StatusKind::Success => html! {
            <Alert r#type={AlertType::Success} title={status.message.clone()} inline={true}>
            </Alert>
        },
        StatusKind::Error => html! {
            <Alert r#type={AlertType::Danger} title={status.message.clone()} inline={true}>
            </Alert>
        },
        StatusKind::Login => html! {
            <div class="login-required">
                <p class="message-text">{&status.message}</p>
                <Button onclick={props.on_login.clone()} variant={ButtonVariant::Primary} block={true}>
                    {"Sign in"}
                </Button>
            </div>
        },
    };

    html! {
        <div id="status" class={status.kind.css_class()}>
            {body}
        </div>
    }
}
