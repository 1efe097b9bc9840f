//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for text-completion providers
///
/// Implemented by the infrastructure layer (textile-llm). A call blocks until
/// the service answers or the provider gives up; transport, authentication and
/// timeouts are the implementation's concern.
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error;

    /// Complete a prompt, returning the raw generated text
    fn complete(&self, prompt: &str) -> Result<String, Self::Error>;
}

impl<P: CompletionProvider + ?Sized> CompletionProvider for &P {
    type Error = P::Error;

    fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        (**self).complete(prompt)
    }
}
