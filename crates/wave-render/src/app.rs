// eframe application: event wiring and render sequencing.

use std::time::Instant;

use wave_client::{ClientConfig, WavepackClient};

use crate::controller::UpdateController;
use crate::form::{self, FormEvent, FormState};
use crate::state::RenderState;
use crate::worker::{FetchWorker, WorkerMessage};
use crate::{array_view, chart_view};

/// Report download target in the working directory.
const REPORT_FILE: &str = "Wavepack_Report.pdf";

pub struct WavepackApp {
    form: FormState,
    controller: UpdateController,
    worker: FetchWorker,
    state: RenderState,
    status: Option<String>,
}

impl WavepackApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let form = FormState::default();
        let mut controller = UpdateController::new();
        let worker = FetchWorker::new(WavepackClient::new(ClientConfig::default()));

        // Solve the defaults right away so the first frame has something to
        // show once the service answers.
        let seq = controller.note_commit();
        worker.dispatch_calculate(seq, form.calc_request(), cc.egui_ctx.clone());

        Self {
            form,
            controller,
            worker,
            state: RenderState::default(),
            status: None,
        }
    }

    /// Drain completed requests. All render-state mutation happens here, on
    /// the UI thread, in arrival order, with stale calculations dropped by
    /// sequence token.
    fn poll_worker(&mut self) {
        while let Ok(message) = self.worker.rx.try_recv() {
            match message {
                WorkerMessage::Calc { seq, result } => {
                    self.controller.finish_fetch();
                    match result {
                        Ok(result) => {
                            if self.controller.try_apply(seq) {
                                self.state.apply(result);
                                self.status = None;
                            }
                            // A newer response already rendered; drop this one.
                        }
                        Err(err) => {
                            // Prior render state stays up; just report it.
                            eprintln!("calculation request failed: {err}");
                            self.status = Some(format!("Calculation failed: {err}"));
                        }
                    }
                }
                WorkerMessage::Report { result } => match result {
                    Ok(bytes) => match save_report(&bytes) {
                        Ok(()) => {
                            self.status = Some(format!("Report saved to {REPORT_FILE}"));
                        }
                        Err(err) => {
                            eprintln!("report write failed: {err}");
                            self.status = Some(format!("Report export failed: {err}"));
                        }
                    },
                    Err(err) => {
                        eprintln!("report request failed: {err}");
                        self.status = Some(format!("Report export failed: {err}"));
                    }
                },
            }
        }
    }

    fn dispatch_fetch(&mut self, seq: u64, ctx: &egui::Context) {
        self.worker
            .dispatch_calculate(seq, self.form.calc_request(), ctx.clone());
    }
}

impl eframe::App for WavepackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        let now = Instant::now();
        if let Some(seq) = self.controller.poll_deadline(now) {
            self.dispatch_fetch(seq, ctx);
        }

        let event = form::draw_controls(
            ctx,
            &mut self.form,
            self.controller.phase(),
            self.status.as_deref(),
            self.state.readouts.as_ref(),
        );
        match event {
            Some(FormEvent::Draft) => self.controller.note_draft(now),
            Some(FormEvent::Commit) => {
                let seq = self.controller.note_commit();
                self.dispatch_fetch(seq, ctx);
            }
            Some(FormEvent::Export) => {
                self.worker
                    .dispatch_report(self.form.calc_request(), ctx.clone());
                self.status = Some("Generating report…".to_string());
            }
            None => {}
        }

        array_view::draw_array(ctx, self.state.projection.as_ref());
        chart_view::draw_charts(ctx, self.state.charts.pt(), self.state.charts.af());

        // Wake up when the debounce deadline is due; fetch completions
        // repaint through the worker's context handle.
        if let Some(wait) = self.controller.time_to_deadline(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Write the PDF through a temp file and rename into place, so a failed
/// export never leaves a partial report behind.
fn save_report(bytes: &[u8]) -> std::io::Result<()> {
    let tmp = format!("{REPORT_FILE}.part");
    if let Err(err) = std::fs::write(&tmp, bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(err);
    }
    std::fs::rename(&tmp, REPORT_FILE)
}
