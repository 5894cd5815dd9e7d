// Library root
// -----------
// The binary (`main.rs`) is a thin shell over these modules.
//
// Module responsibilities:
// - `category`: the fixed set of Sammy types and the permissive resolver.
// - `api`: request/response types and the blocking HTTP client.
// - `config`: clap flags and the validated `Config` built from them.
// - `ui`: prompts, spinner and terminal rendering.
// - `app`: the single create flow tying the above together.
// - `logger`: env_logger setup, bridged through indicatif.
pub mod api;
pub mod app;
pub mod category;
pub mod config;
pub mod logger;
pub mod ui;
