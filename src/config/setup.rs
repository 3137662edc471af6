//! Setup guide shown by `copilot setup`.

use super::ModelConfig;

/// Build the setup guide for the configured models and endpoint.
pub fn setup_guide(config: &ModelConfig) -> String {
    let rule = "═".repeat(67);
    let mut out = String::new();

    out.push_str(&format!("{rule}\n"));
    out.push_str("  Data Engineering Copilot Setup\n");
    out.push_str(&format!("{rule}\n\n"));
    out.push_str("1. Install Ollama: https://ollama.ai\n");
    out.push_str("2. Pull required models:\n");
    out.push_str(&format!("   • ollama pull {}\n", config.primary_model));
    if config.fallback_model != config.primary_model {
        out.push_str(&format!("   • ollama pull {}\n", config.fallback_model));
    }
    out.push_str(&format!("3. Make sure Ollama is serving at {}\n", config.base_url));
    out.push_str("4. Optionally export OLLAMA_MODEL, OLLAMA_FALLBACK_MODEL and OLLAMA_BASE_URL\n");
    out.push_str("5. Run: copilot status\n\n");
    out.push_str("Ready to use!\n");

    out
}

/// Print the setup guide.
pub fn print_setup_guide(config: &ModelConfig) {
    print!("{}", setup_guide(config));
}
