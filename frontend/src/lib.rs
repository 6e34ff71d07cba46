//! Frontend do Sistema de Estacionamento
//!
//! Arquitetura orientada a contexto, com camadas de baixa dependência
//! entre si:
//! - `web::route`: tabela de rotas (modelo de domínio)
//! - `web::router`: serviço de rotas (motor de navegação)
//! - `api`: clientes HTTP dos recursos do backend
//! - `components`: camada de componentes de UI
//! - `pages`: uma tela por rota

pub mod api {
    pub mod acessos;
    mod client;
    pub mod contratantes;
    pub mod diarias;
    pub mod diarias_noturnas;
    pub mod error;
    pub mod estacionamentos;
    pub mod eventos;
    pub mod mensalistas;
    pub mod tempos;
    pub mod veiculos;
}
mod components {
    pub mod common;
    pub mod confirm_dialog;
    pub mod layout;
    pub mod toast;
}
mod config;
mod page;
mod pages {
    pub mod contratante_details;
    pub mod contratante_form;
    pub mod dashboard_estacionamentos;
    pub mod estacionamento_details;
    pub mod estacionamento_form;
    pub mod evento_details;
    pub mod evento_form;
    pub mod mensalista_details;
    pub mod mensalista_form;
    pub mod not_found;
    pub mod veiculo_details;
    pub mod veiculo_form;
}

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::components::toast::provide_toasts;
use crate::pages::contratante_details::ContratanteDetails;
use crate::pages::contratante_form::ContratanteForm;
use crate::pages::dashboard_estacionamentos::DashboardEstacionamentos;
use crate::pages::estacionamento_details::EstacionamentoDetails;
use crate::pages::estacionamento_form::EstacionamentoForm;
use crate::pages::evento_details::EventoDetails;
use crate::pages::evento_form::EventoForm;
use crate::pages::mensalista_details::MensalistaDetails;
use crate::pages::mensalista_form::MensalistaForm;
use crate::pages::not_found::NotFoundPage;
use crate::pages::veiculo_details::VeiculoDetails;
use crate::pages::veiculo_form::VeiculoForm;

// Encapsulamento leve das APIs nativas do navegador.
// Fora do HTTP, substitui os crates gloo-* para reduzir o binário WASM.
pub(crate) mod web {
    pub mod console;
    pub mod route;
    pub mod router;
    pub mod storage;
}

use web::route::{AppRoute, EventoParent};
use web::router::{Router, RouterOutlet};

/// Função de casamento de rotas.
///
/// Devolve a visão correspondente a cada variante de `AppRoute`.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <DashboardEstacionamentos /> }.into_any(),
        AppRoute::EstacionamentoAdd => view! { <EstacionamentoForm /> }.into_any(),
        AppRoute::EstacionamentoDetails { id } => {
            view! { <EstacionamentoDetails id=id /> }.into_any()
        }
        AppRoute::EstacionamentoEdit { id } => view! { <EstacionamentoForm id=id /> }.into_any(),
        AppRoute::VeiculoAdd { estacionamento_id } => {
            view! { <VeiculoForm estacionamento_id=estacionamento_id /> }.into_any()
        }
        AppRoute::VeiculoDetails { id } => view! { <VeiculoDetails id=id /> }.into_any(),
        AppRoute::VeiculoEdit { id } => view! { <VeiculoForm id=id /> }.into_any(),
        AppRoute::MensalistaAdd { estacionamento_id } => {
            view! { <MensalistaForm estacionamento_id=estacionamento_id /> }.into_any()
        }
        AppRoute::MensalistaDetails { id } => view! { <MensalistaDetails id=id /> }.into_any(),
        AppRoute::MensalistaEdit { id } => view! { <MensalistaForm id=id /> }.into_any(),
        AppRoute::ContratanteAdd { estacionamento_id } => {
            view! { <ContratanteForm estacionamento_id=estacionamento_id /> }.into_any()
        }
        AppRoute::ContratanteDetails { id } => view! { <ContratanteDetails id=id /> }.into_any(),
        AppRoute::ContratanteEdit { id } => view! { <ContratanteForm id=id /> }.into_any(),
        AppRoute::EventoAdd { parent } => match parent {
            EventoParent::Estacionamento(id) => {
                view! { <EventoForm estacionamento_id=id /> }.into_any()
            }
            EventoParent::Contratante(id) => view! { <EventoForm contratante_id=id /> }.into_any(),
        },
        AppRoute::EventoDetails { id } => view! { <EventoDetails id=id /> }.into_any(),
        AppRoute::EventoEdit { id } => view! { <EventoForm id=id /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // O contexto de avisos é criado antes de qualquer página montar,
    // para que mensagens de sucesso sobrevivam à navegação seguinte.
    provide_toasts();

    view! {
        <Router>
            <MainLayout>
                <RouterOutlet matcher=route_matcher />
            </MainLayout>
        </Router>
    }
}
