use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Visible toasts, newest first, capped at `TOAST_LIMIT`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        variant: ToastVariant,
    },
    Dismiss(u32),
}

impl ToastQueue {
    pub fn push(&mut self, title: String, description: String, variant: ToastVariant) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.insert(
            0,
            Toast {
                id,
                title,
                description,
                variant,
            },
        );
        self.toasts.truncate(config::TOAST_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push {
                title,
                description,
                variant,
            } => {
                next.push(title, description, variant);
            }
            ToastAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        next.into()
    }
}

pub type ToastContext = UseReducerHandle<ToastQueue>;

pub fn notify(toasts: &Option<ToastContext>, title: &str, description: &str, variant: ToastVariant) {
    if let Some(toasts) = toasts {
        toasts.dispatch(ToastAction::Push {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        });
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                // Dropping the timeout cancels it if the toast goes away first.
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let variant_class = match props.toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast-destructive",
    };

    html! {
        <div class={variant_class} role="status" {onclick}>
            <div class="toast-title">{&props.toast.title}</div>
            <div class="toast-description">{&props.toast.description}</div>
        </div>
    }
}

#[function_component(Toaster)]
pub fn toaster() -> Html {
    let toasts = use_context::<ToastContext>();
    let Some(toasts) = toasts else {
        return html! {};
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toaster">
            <style>
                {r#"
                .toaster {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    max-width: 380px;
                }
                .toast {
                    background: #1f2937;
                    color: #fff;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 1rem 1.25rem;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
                    cursor: pointer;
                    animation: toastIn 0.3s ease-out;
                }
                .toast-destructive {
                    background: #b91c1c;
                    border-color: #ef4444;
                }
                .toast-title {
                    font-weight: 600;
                    margin-bottom: 0.25rem;
                }
                .toast-description {
                    font-size: 0.9rem;
                    opacity: 0.9;
                }
                @keyframes toastIn {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
            { for toasts.toasts().iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_only_the_newest() {
        let mut queue = ToastQueue::default();
        queue.push("Error".into(), "first".into(), ToastVariant::Destructive);
        let id = queue.push("Success!".into(), "second".into(), ToastVariant::Default);

        assert_eq!(queue.toasts().len(), config::TOAST_LIMIT);
        assert_eq!(queue.toasts()[0].id, id);
        assert_eq!(queue.toasts()[0].description, "second");
    }

    #[test]
    fn dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let id = queue.push("Error".into(), "Please fill in all fields".into(), ToastVariant::Destructive);
        assert!(!queue.dismiss(id + 1));
        assert!(queue.dismiss(id));
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn stale_dismiss_keeps_state() {
        let queue = Rc::new(ToastQueue::default());
        let after = queue.clone().reduce(ToastAction::Dismiss(7));
        assert!(Rc::ptr_eq(&queue, &after));
    }
}
