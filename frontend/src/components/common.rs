//! Componentes de apresentação compartilhados.
//!
//! Renderização pura na gramática de classes do styles.css; nenhuma
//! regra de negócio aqui.

use leptos::prelude::*;

/// Variantes visuais de botão, mapeadas para `button button-<variante>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button-primary",
            ButtonVariant::Secondary => "button button-secondary",
            ButtonVariant::Danger => "button button-danger",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Tipo HTML do botão ("button" ou "submit").
    #[prop(default = "button".to_string(), into)] kind: String,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=kind
            class=variant.class()
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Card(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class="card">
            {title.map(|title| view! { <h2 class="card-title">{title}</h2> })}
            <div class="card-content">{children()}</div>
        </div>
    }
}

/// Grupo rotulado de input editável; o estado vive no sinal do chamador.
#[component]
pub fn InputGroup(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(default = "text".to_string(), into)] input_type: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] on_input: Option<Callback<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] read_only: bool,
    #[prop(optional, into)] placeholder: Option<&'static str>,
    #[prop(optional, into)] step: Option<&'static str>,
    #[prop(optional, into)] max_length: Option<i32>,
) -> impl IntoView {
    view! {
        <div class="input-group">
            <label for=id.clone()>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
                required=required
                readonly=read_only
                placeholder=placeholder
                step=step
                maxlength=max_length
            />
        </div>
    }
}

/// Variante somente leitura, para páginas de detalhes.
#[component]
pub fn InputGroupReadOnly(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(into)] value: String,
) -> impl IntoView {
    view! {
        <div class="input-group">
            <label for=id.clone()>{label}</label>
            <input type="text" id=id value=value readonly=true />
        </div>
    }
}

/// Cartão de item de lista com título, descrição e ações.
///
/// Cada ação só aparece quando o chamador fornece o callback.
#[component]
pub fn ListItemCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional_no_strip, into)] info: Option<String>,
    #[prop(optional_no_strip, into)] on_details: Option<Callback<()>>,
    #[prop(optional_no_strip, into)] on_edit: Option<Callback<()>>,
    #[prop(optional_no_strip, into)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="list-item-card">
            <div class="list-item-content">
                <h3>{title}</h3>
                {description.map(|descricao| view! { <p>{descricao}</p> })}
                {info.map(|info| view! { <span class="list-item-info">{info}</span> })}
            </div>
            <div class="list-item-actions">
                {on_details.map(|callback| view! {
                    <Button variant=ButtonVariant::Secondary on_press=callback>"Detalhes"</Button>
                })}
                {on_edit.map(|callback| view! {
                    <Button variant=ButtonVariant::Secondary on_press=callback>"Editar"</Button>
                })}
                {on_delete.map(|callback| view! {
                    <Button variant=ButtonVariant::Danger on_press=callback>"Apagar"</Button>
                })}
            </div>
        </div>
    }
}
