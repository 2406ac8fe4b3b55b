use anyhow::Result;

use crate::shell::Session;

const HELP: &[(&str, &str)] = &[
    ("add      [A B C ...]", "adds a vertex pointing at A, B, C ..."),
    ("arch     <add|del> <A> <B>", "adds or deletes the arc from A to B"),
    ("cls", "clears the screen"),
    ("del      <A B C ...>", "deletes vertices, renumbering the rest"),
    ("exit | quit | q", "leaves the shell"),
    ("find     <A> <B>", "looks for an arc from A to B"),
    ("help", "shows this table"),
    ("list     [-t]", "prints the graph (-t appends 'tell')"),
    ("new      [-f]", "clears the graph (-f skips the question)"),
    ("set      <A>: [B C D ...]", "replaces the arcs of A"),
    ("size     <n> [-f]", "resizes the graph (-f skips the question)"),
    ("tell", "prints statistics about the graph"),
];

pub fn run_help(session: &mut Session<'_>) -> Result<()> {
    let out = session.console.out();
    writeln!(out, "\nGraph Generator - Help\n")?;
    for (usage, about) in HELP {
        writeln!(out, "\t{usage:<28} - {about}")?;
    }
    writeln!(out, "\nIndices are numbers or 'last' (the newest vertex).")?;
    writeln!(out, "Run '<command> --help' for details on one command.\n")?;
    Ok(())
}
