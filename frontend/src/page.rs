//! Estado de página e ciclo de vida de buscas.
//!
//! Toda página que busca dados dirige a renderização por um
//! `PageState` e amarra cada busca a um `MountGuard`:
//! - o estado só transita por início, sucesso ou falha de uma busca;
//! - respostas que chegam depois do desmonte da página são descartadas.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Máquina de estados de uma página que busca dados.
///
/// `Idle -> Loading -> Ready(T) | Failed(mensagem)`. Conclusões sem um
/// `start` anterior são ignoradas, e `Failed` nunca retém dados de uma
/// busca anterior.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageState<T> {
    /// Nenhuma busca disparada ainda.
    #[default]
    Idle,
    /// Busca em andamento.
    Loading,
    /// Busca concluída com dados.
    Ready(T),
    /// Busca concluída com falha; guarda só a mensagem.
    Failed(String),
}

impl<T> PageState<T> {
    /// Marca o início de uma busca.
    pub fn start(&mut self) {
        *self = PageState::Loading;
    }

    /// Conclui a busca em andamento com dados.
    pub fn succeed(&mut self, data: T) {
        if matches!(self, PageState::Loading) {
            *self = PageState::Ready(data);
        }
    }

    /// Conclui a busca em andamento com falha.
    pub fn fail(&mut self, mensagem: impl Into<String>) {
        if matches!(self, PageState::Loading) {
            *self = PageState::Failed(mensagem.into());
        }
    }

    /// Ajusta os dados no lugar; só tem efeito em `Ready`.
    pub fn update_data(&mut self, f: impl FnOnce(&mut T)) {
        if let PageState::Ready(data) = self {
            f(data);
        }
    }
}

/// Amarra buscas ao ciclo de vida de uma página.
///
/// Um clone entra em cada `spawn_local`; depois que o componente
/// desmonta, `is_alive` passa a ser falso e a resposta tardia é
/// descartada sem tocar em estado algum.
#[derive(Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    /// Cria o guard e registra o desarme no desmonte do componente.
    pub fn new() -> Self {
        let guard = Self::armed();
        let flag = Arc::clone(&guard.0);
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        guard
    }

    fn armed() -> Self {
        MountGuard(Arc::new(AtomicBool::new(true)))
    }

    /// A página dona deste guard ainda está montada?
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    #[cfg(test)]
    fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluxo_de_sucesso() {
        let mut estado = PageState::Idle;
        estado.start();
        assert_eq!(estado, PageState::Loading);
        estado.succeed(vec![1, 2]);
        assert_eq!(estado, PageState::Ready(vec![1, 2]));
    }

    #[test]
    fn falha_nunca_retem_dados_da_busca_anterior() {
        let mut estado = PageState::Idle;
        estado.start();
        estado.succeed(vec![1, 2]);

        estado.start();
        estado.fail("sem resposta do servidor");
        assert_eq!(estado, PageState::Failed("sem resposta do servidor".into()));
    }

    #[test]
    fn conclusoes_sem_busca_em_andamento_sao_ignoradas() {
        let mut estado: PageState<Vec<i32>> = PageState::Idle;
        estado.succeed(vec![1]);
        assert_eq!(estado, PageState::Idle);
        estado.fail("tarde demais");
        assert_eq!(estado, PageState::Idle);

        estado.start();
        estado.succeed(vec![1]);
        // A segunda conclusão da mesma busca não sobrescreve a primeira.
        estado.fail("tarde demais");
        assert_eq!(estado, PageState::Ready(vec![1]));
    }

    #[test]
    fn ajuste_local_so_em_ready() {
        let mut estado = PageState::Ready(vec![1, 2, 3]);
        estado.update_data(|itens| itens.retain(|&i| i != 2));
        assert_eq!(estado, PageState::Ready(vec![1, 3]));

        let mut carregando: PageState<Vec<i32>> = PageState::Loading;
        carregando.update_data(|itens| itens.push(9));
        assert_eq!(carregando, PageState::Loading);
    }

    #[test]
    fn guard_desarmado_sinaliza_descarte() {
        let guard = MountGuard::armed();
        assert!(guard.is_alive());

        let clone = guard.clone();
        clone.release();
        assert!(!guard.is_alive());
    }
}
