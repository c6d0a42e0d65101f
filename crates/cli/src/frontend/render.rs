//! Text rendering of snapshots.

use std::fmt::Write as _;

use stepper::{Phase, StepSnapshot, WorkingRegisters};

/// One-line summary used for playback frames.
pub(crate) fn frame_line(snapshot: &StepSnapshot) -> String {
    let mut line = format!(
        "clock {}/{} block {}/{} {} {}: {}",
        snapshot.clock,
        snapshot.last_clock,
        snapshot.block,
        snapshot.block_count,
        snapshot.phase,
        snapshot.step,
        detailed_title(snapshot),
    );
    if let Some(digest) = &snapshot.digest {
        let _ = write!(line, " = {digest}");
    }
    line
}

/// Full multi-section report of one snapshot.
pub(crate) fn render_snapshot(snapshot: &StepSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "clock {} of {} ({:.1}%)",
        snapshot.clock,
        snapshot.last_clock,
        snapshot.progress() * 100.0
    );
    let _ = writeln!(
        out,
        "block {} of {}, {} step {}: {}",
        snapshot.block,
        snapshot.block_count,
        snapshot.phase,
        snapshot.step,
        detailed_title(snapshot)
    );

    let padding = snapshot.padding;
    let _ = writeln!(
        out,
        "\npadding: {} message bits, 1 marker bit, {} zero bits, 64 length bits ({} block{})",
        padding.message_bits,
        padding.zero_bits,
        padding.block_count,
        if padding.block_count == 1 { "" } else { "s" }
    );

    let computed = snapshot.schedule.computed();
    if !computed.is_empty() {
        let _ = writeln!(out, "\nschedule ({} of 64 words):", computed.len());
        for (index, word) in computed.iter().enumerate() {
            let marker = if snapshot.current_word == Some(index) {
                '>'
            } else {
                ' '
            };
            let _ = writeln!(out, " {marker}w[{index:2}] {word:032b}  {word:08x}");
        }
    }

    if let Some(terms) = &snapshot.word_terms {
        let t = terms.index;
        let _ = writeln!(
            out,
            "\nw[{t}] = w[{}] + s0(w[{}]) + w[{}] + s1(w[{}])",
            t - 16,
            t - 15,
            t - 7,
            t - 2
        );
        let _ = writeln!(
            out,
            "      = {:08x} + {:08x} + {:08x} + {:08x} = {:08x}",
            terms.w16, terms.sigma0, terms.w7, terms.sigma1, terms.result
        );
    }

    if shows_registers(snapshot.phase) {
        let _ = writeln!(out, "\nregisters:");
        write_registers(&mut out, &snapshot.registers, &snapshot.previous_registers);
    }

    if let Some(terms) = &snapshot.round_terms {
        let _ = writeln!(out, "\nround {}:", terms.round);
        let _ = writeln!(
            out,
            "  S1 {:08x}  ch {:08x}  T1 {:08x}",
            terms.big_sigma1, terms.choice, terms.temp1
        );
        let _ = writeln!(
            out,
            "  S0 {:08x}  maj {:08x}  T2 {:08x}",
            terms.big_sigma0, terms.majority, terms.temp2
        );
    }

    let _ = writeln!(out, "\nhash state:");
    let current = snapshot.hash_state.words();
    let previous = snapshot.previous_hash_state.words();
    for (index, (word, before)) in current.iter().zip(previous).enumerate() {
        let changed = if word == before { ' ' } else { '*' };
        let _ = writeln!(out, "  h{index} {word:08x}{changed}");
    }

    if let Some(digest) = &snapshot.digest {
        let _ = writeln!(out, "\ndigest: {digest}");
    }

    out
}

/// Step title with the word or round index appended where one applies.
fn detailed_title(snapshot: &StepSnapshot) -> String {
    match (snapshot.current_word, snapshot.current_round) {
        (Some(word), _) => format!("{} w[{word}]", snapshot.title),
        (None, Some(round)) => format!("{} {round}", snapshot.title),
        (None, None) => snapshot.title.to_owned(),
    }
}

const fn shows_registers(phase: Phase) -> bool {
    matches!(
        phase,
        Phase::Initialization | Phase::Compression | Phase::Digest
    )
}

fn write_registers(out: &mut String, current: &WorkingRegisters, previous: &WorkingRegisters) {
    for ((name, word), before) in WorkingRegisters::NAMES
        .iter()
        .zip(current.to_array())
        .zip(previous.to_array())
    {
        let changed = if word == before { ' ' } else { '*' };
        let _ = writeln!(out, "  {name} {word:08x}{changed}");
    }
}
