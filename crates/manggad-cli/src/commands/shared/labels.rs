use anyhow::bail;
use manggad_core::entities::NewThesis;
use manggad_core::enums::{Department, Program};

/// Resolve a department and program pair given as labels or codes.
///
/// Fails when either is unknown or when the program belongs to another school.
pub fn resolve_pair(department: &str, program: &str) -> anyhow::Result<(Department, Program)> {
    let department = Department::from_label(department)?;
    let program = Program::from_label(program)?;
    if program.department() != department {
        bail!(
            "program '{}' is offered by {}, not {}",
            program.label(),
            program.department().label(),
            department.label()
        );
    }
    Ok((department, program))
}

/// Replace recognized department and program values with their canonical
/// labels. Unrecognized values are kept as given.
pub fn canonicalize(thesis: &mut NewThesis) {
    if let Ok(department) = Department::from_label(&thesis.department) {
        thesis.department = department.label().to_string();
    }
    if let Ok(program) = Program::from_label(&thesis.program) {
        thesis.program = program.label().to_string();
    }
}
