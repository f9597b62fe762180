use crate::legality::check::{CheckIdentifier, CheckResult, Severity};
use crate::legality::context::AnalysisContext;
use crate::legality::encounter::split_evolution_check;

/// Top bit of the encryption constant, flipped by the transfer service when
/// the carried PID would otherwise become shiny.
const TRANSFER_SHINY_MASK: u32 = 0x8000_0000;

pub(super) fn ecpid(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    if specimen.format < 3 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let ec = specimen.encryption_constant;
    let pid = specimen.pid;

    if specimen.format >= 6 && ec == 0 {
        lines.push(CheckResult::fishy("Encryption Constant is not set.", CheckIdentifier::Ec));
    }
    if pid == 0 {
        lines.push(CheckResult::fishy("PID is not set.", CheckIdentifier::Pid));
    }
    if specimen.origin_generation() >= 6 && pid == ec {
        lines.push(CheckResult::fishy("Encryption Constant matches PID.", CheckIdentifier::Pid));
    }

    if let Some(required) = ctx.static_encounter().and_then(|encounter| encounter.shiny) {
        if required != specimen.is_shiny() {
            let comment = if required {
                "Encounter must be shiny."
            } else {
                "Encounter cannot be shiny."
            };
            lines.push(CheckResult::invalid(comment, CheckIdentifier::Shiny));
            return lines;
        }
    }

    let generation = specimen.origin_generation();
    if generation >= 6 {
        if let Some(result) = split_evolution_check(ctx) {
            let valid = result.is_valid();
            lines.push(result);
            if !valid {
                return lines;
            }
        }
        let xor = specimen.tsv() ^ specimen.psv();
        if (8..16).contains(&xor) && pid ^ TRANSFER_SHINY_MASK == ec {
            lines.push(CheckResult::fishy(
                "Encryption Constant matches shinyxored PID.",
                CheckIdentifier::Ec,
            ));
        }
        return lines;
    }

    // Transferred from generation 3-5: the PID becomes the encryption constant.
    if specimen.format >= 6 && (3..=5).contains(&generation) {
        if let Some(result) = transfer_relation(specimen.tid, specimen.sid, pid, ec) {
            lines.push(result);
        }
    }
    lines
}

fn transfer_relation(tid: u16, sid: u16, pid: u32, ec: u32) -> Option<CheckResult> {
    let xor = u32::from(tid ^ sid) ^ (pid & 0xFFFF) ^ (pid >> 16);
    let flipped = (xor & !7) == 8;
    let expected = if flipped { pid ^ TRANSFER_SHINY_MASK } else { pid };
    if expected == ec {
        return None;
    }
    let comment = if flipped {
        "PID should be equal to EC [with top bit flipped]!"
    } else {
        "PID should be equal to EC!"
    };
    Some(CheckResult::new(Severity::Invalid, comment, CheckIdentifier::EcPid))
}
