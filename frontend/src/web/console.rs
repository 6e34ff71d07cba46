//! Logging no console do navegador.
//!
//! No alvo wasm escreve direto no console via `web_sys`; nos demais
//! alvos cai em `eprintln!`, o que mantém os caminhos de log
//! executáveis nos testes nativos.

#[cfg(target_arch = "wasm32")]
pub fn log(mensagem: &str) {
    web_sys::console::log_1(&mensagem.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(mensagem: &str) {
    eprintln!("[log] {mensagem}");
}

#[cfg(target_arch = "wasm32")]
pub fn warn(mensagem: &str) {
    web_sys::console::warn_1(&mensagem.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(mensagem: &str) {
    eprintln!("[warn] {mensagem}");
}

#[cfg(target_arch = "wasm32")]
pub fn error(mensagem: &str) {
    web_sys::console::error_1(&mensagem.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(mensagem: &str) {
    eprintln!("[error] {mensagem}");
}
