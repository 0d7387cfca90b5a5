use std::sync::mpsc;

use wave_client::{ClientError, WavepackClient};
use wave_core::{CalcRequest, CalculationResult};

/// Completion messages drained on the UI thread, once per frame.
pub enum WorkerMessage {
    Calc {
        seq: u64,
        result: Result<CalculationResult, ClientError>,
    },
    Report {
        result: Result<Vec<u8>, ClientError>,
    },
}

/// Owns the background runtime the HTTP calls run on. Dispatch never blocks
/// the UI thread; each completed request pokes the egui context so the frame
/// that renders it isn't deferred until the next input event.
pub struct FetchWorker {
    runtime: tokio::runtime::Runtime,
    client: WavepackClient,
    tx: mpsc::Sender<WorkerMessage>,
    pub rx: mpsc::Receiver<WorkerMessage>,
}

impl FetchWorker {
    pub fn new(client: WavepackClient) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("failed to start fetch runtime");
        let (tx, rx) = mpsc::channel();
        Self {
            runtime,
            client,
            tx,
            rx,
        }
    }

    pub fn dispatch_calculate(&self, seq: u64, request: CalcRequest, ctx: egui::Context) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client.calculate(&request).await;
            if tx.send(WorkerMessage::Calc { seq, result }).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    pub fn dispatch_report(&self, request: CalcRequest, ctx: egui::Context) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client.report(&request).await;
            if tx.send(WorkerMessage::Report { result }).is_ok() {
                ctx.request_repaint();
            }
        });
    }
}
