/// Status messages rendered in the popup's status region

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Success,
    Error,
    Login,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Loading => "loading",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
            StatusKind::Login => "login",
        }
    }

    /// Class attribute of the status region
    pub fn css_class(self) -> String {
        format!("status {}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Status {
        Status {
            kind,
            message: message.into(),
        }
    }

    pub fn loading(message: impl Into<String>) -> Status {
        Status::new(StatusKind::Loading, message)
    }

    pub fn success(message: impl Into<String>) -> Status {
        Status::new(StatusKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Status {
        Status::new(StatusKind::Error, message)
    }

    /// Prompt shown with the sign-in button
    pub fn login_required() -> Status {
        Status::new(StatusKind::Login, "Sign in to save this article")
    }

    pub fn is_login(&self) -> bool {
        self.kind == StatusKind::Login
    }
}
