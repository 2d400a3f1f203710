use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::ai::{CompletionGateway, CompletionOptions, ImageAttachment};

/// Execute the ask command - send one prompt through the gateway
pub fn run_ask(
    gateway: &CompletionGateway,
    prompt: &str,
    temperature: f32,
    max_retries: u32,
    image_path: Option<&Path>,
) -> Result<()> {
    if !(0.0..=1.0).contains(&temperature) {
        bail!("Temperature must be between 0.0 and 1.0.");
    }

    let image = image_path.map(ImageAttachment::open).transpose()?;

    let mut options = CompletionOptions::default()
        .with_temperature(temperature)
        .with_max_retries(max_retries);
    if let Some(ref image) = image {
        options = options.with_image(image);
    }

    let result = gateway.complete(prompt, options);
    println!("{}", result.text);
    println!("\n[source: {}]", result.source);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let gateway = CompletionGateway::new(None, None, None);
        assert!(run_ask(&gateway, "hi", 1.5, 2, None).is_err());
        assert!(run_ask(&gateway, "hi", -0.1, 2, None).is_err());
    }

    #[test]
    fn test_missing_image_file() {
        let gateway = CompletionGateway::new(None, None, None);
        let result = run_ask(&gateway, "hi", 0.7, 2, Some(Path::new("/nonexistent/photo.jpg")));
        assert!(result.is_err());
    }

    #[test]
    fn test_unconfigured_gateway_still_answers() {
        let gateway = CompletionGateway::new(None, None, None);
        assert!(run_ask(&gateway, "hi", 0.7, 2, None).is_ok());
    }
}
