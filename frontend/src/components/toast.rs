//! Notificações flutuantes.
//!
//! O estado vive no Context do App para que um aviso disparado por uma
//! página sobreviva à navegação que a própria ação provoca (salvar e
//! voltar para os detalhes do pai, por exemplo). A área de exibição se
//! auto-limpa alguns segundos depois de cada aviso.

use std::time::Duration;

use leptos::prelude::*;

const TOAST_DURACAO: Duration = Duration::from_secs(4);

/// Um aviso visível: mensagem e se representa um erro.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub mensagem: String,
    pub erro: bool,
}

/// Estado compartilhado das notificações.
#[derive(Clone, Copy)]
pub struct ToastState {
    atual: RwSignal<Option<Toast>>,
}

impl ToastState {
    fn new() -> Self {
        Self {
            atual: RwSignal::new(None),
        }
    }

    pub fn sucesso(&self, mensagem: impl Into<String>) {
        self.atual.set(Some(Toast {
            mensagem: mensagem.into(),
            erro: false,
        }));
    }

    pub fn erro(&self, mensagem: impl Into<String>) {
        self.atual.set(Some(Toast {
            mensagem: mensagem.into(),
            erro: true,
        }));
    }
}

/// Cria o estado de notificações e o põe no Context.
pub fn provide_toasts() -> ToastState {
    let toasts = ToastState::new();
    provide_context(toasts);
    toasts
}

/// Recupera o estado de notificações do Context.
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
        .expect("ToastState não encontrado no Context. O App deve prover as notificações.")
}

/// Área de exibição dos avisos; fica no layout, acima do conteúdo.
#[component]
pub fn ToastArea() -> impl IntoView {
    let toasts = use_toasts();
    let atual = toasts.atual;

    // Limpa o aviso alguns segundos depois de aparecer.
    Effect::new(move |_| {
        if atual.get().is_some() {
            set_timeout(move || atual.set(None), TOAST_DURACAO);
        }
    });

    view! {
        {move || {
            atual
                .get()
                .map(|toast| {
                    let classe = if toast.erro { "toast toast-erro" } else { "toast toast-sucesso" };
                    view! { <div class=classe>{toast.mensagem}</div> }
                })
        }}
    }
}
