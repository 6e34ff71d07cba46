//! Serviço de rotas - motor de navegação
//!
//! Encapsula a History API do web_sys com alta coesão: toda operação
//! sobre window.history fica concentrada neste módulo. A página
//! exibida é dirigida por um sinal com a rota atual; navegação
//! programática sempre aponta um destino explícito (`AppRoute`), e os
//! botões de voltar/avançar do navegador entram pelo popstate.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// Path atual do navegador.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Empilha um novo estado no History.
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Serviço de rotas.
///
/// Exposto via Context; as páginas navegam por ele e o `RouterOutlet`
/// observa o sinal da rota atual.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    fn new() -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
        }
    }

    /// Sinal somente leitura com a rota atual.
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navega para a rota, empilhando no histórico do navegador.
    pub fn navigate(&self, route: AppRoute) {
        push_history_state(&route.to_path());
        self.set_route.set(route);
    }

    /// Liga o listener dos botões de voltar/avançar.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // O listener acompanha a aplicação inteira; o vazamento é intencional.
        closure.forget();
    }
}

/// Cria o serviço, liga os listeners e o põe no Context.
fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// Recupera o serviço de rotas do Context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService não encontrado no Context. O Router deve envolver a aplicação.")
}

// ============================================================================
// Componentes
// ============================================================================

/// Componente raiz do roteador; deve envolver o App inteiro.
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();
    children()
}

/// Saída do roteador.
///
/// Renderiza a visão correspondente à rota atual.
#[component]
pub fn RouterOutlet(
    /// Função de casamento: recebe a rota atual e devolve a visão.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// Âncora que navega pelo History em vez de recarregar a página.
///
/// Mantém o href real para o navegador (abrir em nova aba, copiar link).
#[component]
pub fn RouteLink(to: AppRoute, children: Children) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    view! {
        <a
            href=href
            on:click=move |ev| {
                ev.prevent_default();
                router.navigate(to);
            }
        >
            {children()}
        </a>
    }
}
