//! Interactive command loop over a [`TernaryHeap`]
//!
//! The loop prints a numbered menu, reads a choice and, for insert/remove,
//! one more integer. It is generic over its input and output so the same
//! code drives stdin/stdout and in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use crate::input::Tokens;
use crate::ternary::TernaryHeap;
use crate::traits::{BoundedHeap, HeapError};

const RULE: &str = "..........................................................";

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert,
    DeleteMin,
    DeleteMax,
    Remove,
    LevelOrder,
    Exit,
}

impl Command {
    /// Maps a menu number to its command
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Command::Insert),
            2 => Some(Command::DeleteMin),
            3 => Some(Command::DeleteMax),
            4 => Some(Command::Remove),
            5 => Some(Command::LevelOrder),
            6 => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Runs the menu until the exit command or end of input
pub fn run<R: BufRead, W: Write>(heap: &mut TernaryHeap, input: R, out: &mut W) -> io::Result<()> {
    let mut tokens = Tokens::new(input);
    loop {
        print_menu(out)?;
        let command = match tokens.next_integer()? {
            None => break,
            Some(Ok(choice)) => Command::from_choice(choice),
            Some(Err(_)) => None,
        };
        tracing::debug!(?command, "menu choice");

        match command {
            Some(Command::Exit) => break,
            Some(command) => {
                if !dispatch(heap, command, &mut tokens, out)? {
                    break;
                }
            }
            None => writeln!(out, "Enter a valid choice (1-5)")?,
        }
    }
    out.flush()
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Please choose one of the following commands:")?;
    writeln!(out, "1 - insert")?;
    writeln!(out, "2 - deletemin")?;
    writeln!(out, "3 - deletemax")?;
    writeln!(out, "4 - remove")?;
    writeln!(out, "5 - levelorder")?;
    writeln!(out, "6 - exit")?;
    writeln!(out)?;
    out.flush()
}

/// Executes one command. Returns false when input ran out mid-command.
fn dispatch<R: BufRead, W: Write>(
    heap: &mut TernaryHeap,
    command: Command,
    tokens: &mut Tokens<R>,
    out: &mut W,
) -> io::Result<bool> {
    match command {
        Command::Insert => {
            writeln!(out, "Choose a number to be added to the heap")?;
            let Some(value) = read_operand(tokens, out)? else {
                return Ok(false);
            };
            if let Err(HeapError::CapacityExceeded { capacity, value }) = heap.insert(value) {
                writeln!(
                    out,
                    "Error, cannot insert {value}, heap is full (capacity {capacity})."
                )?;
            }
        }
        Command::DeleteMin => match heap.delete_min() {
            Some(value) => writeln!(out, "Deleted {value}")?,
            None => writeln!(out, "The heap is empty")?,
        },
        Command::DeleteMax => match heap.delete_max() {
            Some(value) => writeln!(out, "Deleted {value}")?,
            None => writeln!(out, "The heap is empty")?,
        },
        Command::Remove => {
            writeln!(out, "Choose a number to be removed from the heap")?;
            let Some(value) = read_operand(tokens, out)? else {
                return Ok(false);
            };
            if !heap.remove(value) {
                writeln!(
                    out,
                    "Error, cannot delete {value}, value is not in the heap."
                )?;
            }
        }
        Command::LevelOrder => {
            writeln!(out, "Level Order:")?;
            write!(out, "{}", heap.level_order())?;
            writeln!(out)?;
        }
        Command::Exit => {}
    }
    Ok(true)
}

/// Reads the integer argument of insert/remove, re-prompting on bad tokens.
fn read_operand<R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    out: &mut W,
) -> io::Result<Option<i64>> {
    loop {
        match tokens.next_integer()? {
            None => return Ok(None),
            Some(Ok(value)) => return Ok(Some(value)),
            Some(Err(token)) => writeln!(out, "'{token}' is not a number, try again")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(heap: &mut TernaryHeap, script: &str) -> String {
        let mut out = Vec::new();
        run(heap, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_from_choice() {
        assert_eq!(Command::from_choice(1), Some(Command::Insert));
        assert_eq!(Command::from_choice(6), Some(Command::Exit));
        assert_eq!(Command::from_choice(0), None);
        assert_eq!(Command::from_choice(7), None);
    }

    #[test]
    fn test_insert_and_delete() {
        let mut heap = TernaryHeap::new(4);
        let out = run_script(&mut heap, "1 5\n1 2\n2\n3\n2\n6\n");
        assert!(out.contains("Deleted 2"));
        assert!(out.contains("Deleted 5"));
        assert!(out.contains("The heap is empty"));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_remove_missing_value() {
        let mut heap = TernaryHeap::from_values(4, &[1, 2]);
        let out = run_script(&mut heap, "4 9\n6\n");
        assert!(out.contains("Error, cannot delete 9, value is not in the heap."));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_insert_into_full_heap() {
        let mut heap = TernaryHeap::from_values(1, &[3]);
        let out = run_script(&mut heap, "1 8\n6\n");
        assert!(out.contains("Error, cannot insert 8, heap is full (capacity 1)."));
    }

    #[test]
    fn test_level_order_output() {
        let mut heap = TernaryHeap::from_values(8, &[1, 2, 3, 4, 5]);
        let out = run_script(&mut heap, "5\n6\n");
        assert!(out.contains("Level Order:\n1 \n2 3 4 \n5 \n\n"));
    }

    #[test]
    fn test_invalid_choices() {
        let mut heap = TernaryHeap::new(1);
        let out = run_script(&mut heap, "9\nabc\n6\n");
        assert_eq!(out.matches("Enter a valid choice (1-5)").count(), 2);
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let mut heap = TernaryHeap::new(2);
        run_script(&mut heap, "1");
        assert!(heap.is_empty());
    }
}
