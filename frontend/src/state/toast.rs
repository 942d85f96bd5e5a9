use leptos::*;

#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn push_success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn push_error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.items.iter().filter(|toast| toast.kind == kind).count()
    }
}

pub type ToastContext = RwSignal<ToastState>;

pub fn provide_toasts() -> ToastContext {
    let toasts = create_rw_signal(ToastState::default());
    provide_context(toasts);
    toasts
}

/// Falls back to a detached queue so components still render without a provider.
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| create_rw_signal(ToastState::default()))
}

pub fn notify_success(toasts: ToastContext, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message.into());
}

pub fn notify_error(toasts: ToastContext, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message.into());
}

fn notify(toasts: ToastContext, kind: ToastKind, message: String) {
    if let Some(id) = toasts.try_update(|state| state.push(kind, message)) {
        schedule_dismiss(toasts, id);
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(toasts: ToastContext, id: u64) {
    gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
        let _ = toasts.try_update(|state| state.dismiss(id));
    })
    .forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_toasts: ToastContext, _id: u64) {}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "flex items-start gap-3 bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded shadow"
        }
        ToastKind::Error => {
            "flex items-start gap-3 bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded shadow"
        }
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2 w-80" aria-live="polite">
            <For
                each=move || toasts.get().items().to_vec()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let role = if toast.kind == ToastKind::Error { "alert" } else { "status" };
                    view! {
                        <div class=toast_class(toast.kind) role=role>
                            <p class="flex-1 text-sm">{toast.message}</p>
                            <button
                                class="text-sm opacity-75 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn use_toasts_without_provider_is_detached() {
        with_runtime(|| {
            let toasts = use_toasts();
            notify_error(toasts, "boom");
            assert_eq!(toasts.get_untracked().count(ToastKind::Error), 1);
        });
    }

    #[test]
    fn host_renders_queued_toasts() {
        let html = render_to_string(move || {
            let toasts = provide_toasts();
            notify_success(toasts, "Story approved");
            notify_error(toasts, "Error rejecting story");
            view! { <ToastHost /> }
        });
        assert!(html.contains("Story approved"));
        assert!(html.contains("Error rejecting story"));
        assert!(html.contains("role=\"alert\""));
    }
}
