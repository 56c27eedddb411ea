use lp_app::RequestId;
use lp_app::lp_client::{SolveError, SolveRequest, SolveResponse, SolveResult, Solver};
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread::{self, JoinHandle};

/// One solve request running on its own thread.
///
/// Dropping the worker abandons the request: the thread finishes its call
/// and its result is discarded.
pub struct RunWorker {
    pub request: RequestId,
    outcome_rx: Receiver<SolveResult<SolveResponse>>,
    _handle: JoinHandle<()>,
}

impl RunWorker {
    pub fn start<S>(request: RequestId, solver: S, body: SolveRequest) -> Self
    where
        S: Solver + 'static,
    {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let outcome = solver.solve(&body);
            // The receiver is gone if the run was cancelled.
            let _ = tx.send(outcome);
        });

        Self {
            request,
            outcome_rx: rx,
            _handle: handle,
        }
    }

    /// The outcome, once the request has finished.
    pub fn try_finish(&self) -> Option<SolveResult<SolveResponse>> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(SolveError::Connection {
                message: "solve worker stopped without a result".to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Fixed(&'static str);

    impl Solver for Fixed {
        fn solve(&self, request: &SolveRequest) -> SolveResult<SolveResponse> {
            Ok(SolveResponse {
                solution: format!("{} <- {}", self.0, request.content),
                ..Default::default()
            })
        }
    }

    #[test]
    fn worker_reports_outcome() {
        let worker = RunWorker::start(RequestId::new(), Fixed("23"), SolveRequest::new("max: x;"));
        let outcome = worker
            .outcome_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker should answer");
        assert_eq!(outcome.unwrap().solution, "23 <- max: x;");
    }
}
