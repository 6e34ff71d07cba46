//! Página exibida quando a rota não corresponde a nenhuma tela.

use leptos::prelude::*;

use crate::components::common::{Button, Card};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let router = use_router();

    view! {
        <Card title="Página Não Encontrada">
            <p>"Parece que a página que você está procurando não existe."</p>
            <p>"Por favor, verifique o endereço ou retorne à página inicial."</p>
            <div class="button-group">
                <Button on_press=Callback::new(move |_| router.navigate(AppRoute::Dashboard))>
                    "Voltar para a Dashboard"
                </Button>
            </div>
        </Card>
    }
}
