use super::*;
use crate::ui::GateDecision;
use tracing::debug;

/// 시뮬레이션 레코드 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOperation {
    LoadReport,
    UpdateRecord,
    DeleteRecord,
    ResetPassword,
}

impl RecordOperation {
    /// 진행 메시지
    pub fn progress_text(self) -> &'static str {
        match self {
            RecordOperation::LoadReport => "Loading report",
            RecordOperation::UpdateRecord => "Updating record",
            RecordOperation::DeleteRecord => "Deleting record",
            RecordOperation::ResetPassword => "Resetting password",
        }
    }

    /// 결과 메시지
    pub fn success_text(self) -> &'static str {
        match self {
            RecordOperation::LoadReport => "Report loaded",
            RecordOperation::UpdateRecord => "Record saved",
            RecordOperation::DeleteRecord => "Record removed",
            RecordOperation::ResetPassword => "Password sent",
        }
    }
}

impl App {
    /// 게이트를 거쳐 토스트로 전달
    pub fn notify(&mut self, message: OutboundMessage) -> GateDecision {
        let toast = &mut self.toast;
        let decision = self.gate.notify(&message, |m| toast.show(m.clone()));
        debug!(kind = message.kind.as_str(), ?decision, "outbound message");
        decision
    }

    /// 진행 -> 결과 메시지 순서로 발행
    pub fn run_record_operation(&mut self, operation: RecordOperation) {
        info!(?operation, "record operation");
        self.notify(OutboundMessage::progress(operation.progress_text()));
        self.notify(OutboundMessage::success(operation.success_text()));
    }
}
