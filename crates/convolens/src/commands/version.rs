pub fn run() -> anyhow::Result<()> {
    println!("convolens {}", env!("CARGO_PKG_VERSION"));
    println!("Analytics over tagged chatbot conversation logs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
