//! Modal de confirmação.
//!
//! Usa o elemento `<dialog>` nativo: um Effect sincroniza o sinal
//! `show` com `show_modal()`/`close()`, e o evento `close` cobre o
//! fechamento por ESC.

use leptos::prelude::*;

use super::common::{Button, ButtonVariant};

#[component]
pub fn ConfirmDialog(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] title: String,
    /// Rótulo do botão de confirmação.
    #[prop(default = "Confirmar".to_string(), into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if show.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog
            class="modal"
            node_ref=dialog_ref
            on:close=move |_| on_cancel.run(())
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button
                        type="button"
                        class="modal-close-button"
                        on:click=move |_| on_cancel.run(())
                    >
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
                <div class="modal-footer">
                    <Button variant=ButtonVariant::Danger on_press=on_confirm>
                        {confirm_label}
                    </Button>
                    <Button variant=ButtonVariant::Secondary on_press=on_cancel>
                        "Cancelar"
                    </Button>
                </div>
            </div>
        </dialog>
    }
}
