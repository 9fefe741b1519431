/// Receives the transient "working..." text shown while a compression runs
pub trait StatusReporter {
    fn show(&mut self, text: &str);
    fn clear(&mut self);
}

/// Discards all status updates
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentStatus;

impl StatusReporter for SilentStatus {
    fn show(&mut self, _text: &str) {}

    fn clear(&mut self) {}
}
