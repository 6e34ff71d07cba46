//! Casca de layout: cabeçalho fixo e moldura do conteúdo.

use leptos::prelude::*;

use super::toast::ToastArea;
use crate::web::route::AppRoute;
use crate::web::router::RouteLink;

/// Cabeçalho com o título do sistema e a navegação principal.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <div class="app-title">
                    <RouteLink to=AppRoute::Dashboard>"Sistema de Estacionamento"</RouteLink>
                </div>
                <nav class="main-nav">
                    <ul>
                        <li>
                            <RouteLink to=AppRoute::Dashboard>"Estacionamentos"</RouteLink>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}

/// Moldura comum de todas as páginas.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="main-layout">
            <Header />
            <main class="main-content">
                <ToastArea />
                {children()}
            </main>
        </div>
    }
}
