/// Process adapters wrapping the external uv and deptry CLIs
mod deptry_cli;
mod uv_cli;

pub use deptry_cli::DeptryCli;
pub use uv_cli::UvCli;
