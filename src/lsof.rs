use crate::error::{Result, WorklogError};
use console::style;
use std::collections::HashMap;
use std::process::Command;

const LSOF_COMMAND: &str = "lsof";
const HEADER_PREFIX: &str = "COMMAND";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessFds {
    pub pid: String,
    pub name: String,
    pub count: usize,
}

pub fn exec() -> anyhow::Result<()> {
    if cfg!(windows) {
        return Err(WorklogError::Lsof("lsof not supported on windows".to_string()).into());
    }
    let raw = run_lsof()?;
    let processes = count_descriptors(&raw);
    print!("{}", render_table(&processes, console::colors_enabled()));
    Ok(())
}

fn run_lsof() -> Result<String> {
    let output = Command::new(LSOF_COMMAND).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WorklogError::Lsof("lsof is not installed or not in PATH".to_string())
        } else {
            WorklogError::Io(e)
        }
    })?;
    // lsof exits 1 when some files could not be inspected but still prints
    // everything it could read.
    if !output.status.success() && output.stdout.is_empty() {
        return Err(WorklogError::Lsof(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// One line per open descriptor; tally them per PID, fewest first.
pub fn count_descriptors(raw: &str) -> Vec<ProcessFds> {
    let mut by_pid: HashMap<&str, ProcessFds> = HashMap::new();

    for line in raw.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 || fields[0] == HEADER_PREFIX {
            continue;
        }
        let (name, pid) = (fields[0], fields[1]);
        by_pid
            .entry(pid)
            .or_insert_with(|| ProcessFds {
                pid: pid.to_string(),
                name: name.to_string(),
                count: 0,
            })
            .count += 1;
    }

    let mut processes: Vec<_> = by_pid.into_values().collect();
    processes.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.pid.cmp(&b.pid)));
    processes
}

pub fn render_table(processes: &[ProcessFds], styled: bool) -> String {
    let name_width = processes
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Total".len())
        .max("Name".len());
    let total: usize = processes.iter().map(|p| p.count).sum();
    let rule = "─".repeat(8 + 2 + name_width + 2 + 11);
    let bold = |line: String| style(line).bold().force_styling(styled).to_string();

    let mut table = String::new();
    table.push_str(&bold(format!("{:>8}  {:<name_width$}  {:>11}", "PID", "Name", "Descriptors")));
    table.push('\n');
    table.push_str(&format!("{rule}\n"));
    for p in processes {
        table.push_str(&format!("{:>8}  {:<name_width$}  {:>11}\n", p.pid, p.name, p.count));
    }
    table.push_str(&format!("{rule}\n"));
    table.push_str(&bold(format!("{:>8}  {:>name_width$}  {:>11}", "", "Total", total)));
    table.push('\n');
    table
}
