//! CSR entry point: installs the panic hook and console logger, then
//! mounts [`App`](theme_shell::app::App) onto `<body>`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(theme_shell::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("theme-shell is a browser app; build with --features csr for wasm32");
}
