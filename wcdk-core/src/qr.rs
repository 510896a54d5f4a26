/// Presents a pairing URI to the user, typically as a QR code.
pub trait QrPresenter: Send + Sync {
    fn open(&self, uri: &str);
    fn close(&self);
}

/// Presenter that logs the pairing URI instead of rendering it. Useful for
/// headless consumers that relay the URI elsewhere.
#[derive(Debug, Default)]
pub struct LogQrPresenter;

impl QrPresenter for LogQrPresenter {
    fn open(&self, uri: &str) {
        log::info!("pairing uri: {}", uri);
    }

    fn close(&self) {}
}

#[derive(Debug, Default)]
pub struct NoopQrPresenter;

impl QrPresenter for NoopQrPresenter {
    fn open(&self, _uri: &str) {}

    fn close(&self) {}
}
