//! Interactive menu over any line-based input and text output.

use std::io::{self, BufRead, Write};

use tracing::{debug, error, warn};

use crate::error::InputError;
use crate::output::{print_records, print_top};
use crate::parser::{parse_age, parse_grade};
use crate::record::{GRADE_COUNT, StudentRecord};
use crate::store::RecordStore;

const MENU: &str = "\n--- Student Records ---\n\
                    1. Add student\n\
                    2. Show all students\n\
                    3. Show top student\n\
                    4. Exit";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Top,
    Exit,
}

impl MenuChoice {
    /// Maps the text the user typed to a menu entry, if it names one.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Top),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The menu loop, reading from `input` and writing to `output`.
///
/// Nothing is fatal except the exit choice: invalid input and store errors
/// are reported on `output` and the menu is shown again. End of input is
/// treated like the exit choice.
pub struct Console<'s, S, R, W> {
    store: &'s S,
    input: R,
    output: W,
}

impl<'s, S, R, W> Console<'s, S, R, W>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'s S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Only failures to read the input or write the output are returned.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                debug!("Input closed at the menu");
                return Ok(());
            };

            let flow = match choice.ok().as_deref().and_then(MenuChoice::parse) {
                Some(MenuChoice::Add) => self.add_student()?,
                Some(MenuChoice::List) => self.list_students()?,
                Some(MenuChoice::Top) => self.show_top()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    Flow::Exit
                }
                None => {
                    writeln!(self.output, "Invalid option, try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Writes `label`, then reads one line without its terminator.
    ///
    /// Returns `None` at end of input. A line that is not UTF-8 comes back as
    /// [`InputError::NotText`] so the caller can reject it and carry on.
    fn prompt(&mut self, label: &str) -> io::Result<Option<Result<String, InputError>>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }

        Ok(Some(String::from_utf8(line).map_err(|_| InputError::NotText)))
    }

    fn add_student(&mut self) -> io::Result<Flow> {
        // Reads one field, leaving the add on end of input or bad input.
        macro_rules! field {
            ($label:expr, $parse:expr) => {
                match self.prompt($label)?.map(|reply| reply.and_then($parse)) {
                    None => return Ok(Flow::Exit),
                    Some(Err(e)) => return self.reject(e),
                    Some(Ok(value)) => value,
                }
            };
        }

        let name = field!("Student name: ", Ok::<String, InputError>);
        let age = field!("Age: ", |raw: String| parse_age(&raw));

        let mut grades = [0.0; GRADE_COUNT];
        for (i, grade) in grades.iter_mut().enumerate() {
            *grade = field!(&format!("Grade {}: ", i + 1), |raw: String| parse_grade(&raw));
        }

        let record = StudentRecord::new(&name, age, grades);
        match self.store.append(&record) {
            Ok(()) => writeln!(self.output, "Student added successfully.")?,
            Err(e) => {
                error!(error = %e, "Failed to store record");
                writeln!(self.output, "Error writing to file: {e}")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn reject(&mut self, e: InputError) -> io::Result<Flow> {
        debug!(error = %e, "Discarding student input");
        writeln!(self.output, "Error: age and grades must be valid numbers.")?;
        Ok(Flow::Continue)
    }

    fn list_students(&mut self) -> io::Result<Flow> {
        let records = self.load_records()?;
        print_records(&mut self.output, &records)?;
        Ok(Flow::Continue)
    }

    fn show_top(&mut self) -> io::Result<Flow> {
        let records = self.load_records()?;
        print_top(&mut self.output, &records)?;
        Ok(Flow::Continue)
    }

    // A failed read is reported, and whatever was read before it is still shown.
    fn load_records(&mut self) -> io::Result<Vec<StudentRecord>> {
        match self.store.read_all() {
            Ok(records) => Ok(records),
            Err(partial) => {
                warn!(error = %partial.source, read = partial.records.len(), "Failed to read records");
                writeln!(self.output, "Error reading data: {}", partial.source)?;
                Ok(partial.into_records())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PartialRead, StoreError};
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run(store: &impl RecordStore, input: &str) -> String {
        let mut output = Vec::new();
        Console::new(store, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    struct BrokenStore;

    impl RecordStore for BrokenStore {
        fn append(&self, _record: &StudentRecord) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "students.txt".into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn read_all(&self) -> Result<Vec<StudentRecord>, PartialRead> {
            let error = StoreError::Io {
                path: "students.txt".into(),
                source: io::Error::other("disk gone"),
            };
            Err(PartialRead::new(
                vec![StudentRecord::new("ana", 20, [9.0, 9.0, 9.0])],
                error,
            ))
        }
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_exit_immediately() {
        let store = MemoryStore::new();
        let text = run(&store, "4\n");

        assert!(text.contains("1. Add student"));
        assert!(text.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_add_then_list() {
        let store = MemoryStore::new();
        let text = run(&store, "1\n  ana gomez \n20\n10\n8\n6\n2\n4\n");

        assert_eq!(store.len(), 1);
        assert!(text.contains("Student added successfully."));
        assert!(text.contains("Name: Ana Gomez | Age: 20 | Grades: (10.0, 8.0, 6.0) | Average: 8.00"));
    }

    #[test]
    fn test_add_with_bad_age_discards_record() {
        let store = MemoryStore::new();
        let text = run(&store, "1\nAna\ntwenty\n4\n");

        assert!(store.is_empty());
        assert!(text.contains("Error: age and grades must be valid numbers."));
        assert!(!text.contains("Grade 1: "));
    }

    #[test]
    fn test_add_with_bad_grade_discards_record() {
        let store = MemoryStore::new();
        let text = run(&store, "1\nAna\n20\n9\nnine\n4\n");

        assert!(store.is_empty());
        assert!(text.contains("Error: age and grades must be valid numbers."));
        assert!(!text.contains("Grade 3: "));
    }

    #[test]
    fn test_show_top() {
        let store = MemoryStore::with_records(vec![
            StudentRecord::new("Ana", 20, [9.0, 9.0, 9.0]),
            StudentRecord::new("Beto", 21, [5.0, 5.0, 5.0]),
        ]);
        let text = run(&store, "3\n4\n");

        assert!(text.contains("The top student is Ana with average 9.00"));
    }

    #[test]
    fn test_empty_store_messages() {
        let store = MemoryStore::new();
        let text = run(&store, "2\n3\n4\n");

        assert_eq!(text.matches("No students registered.").count(), 2);
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let store = MemoryStore::new();
        let text = run(&store, "9\n4\n");

        assert!(text.contains("Invalid option, try again."));
        assert_eq!(text.matches("Choose an option: ").count(), 2);
    }

    #[test]
    fn test_end_of_input_exits() {
        let store = MemoryStore::new();
        let text = run(&store, "2\n");

        assert_eq!(text.matches("Choose an option: ").count(), 2);
        assert!(!text.contains("Exiting..."));
    }

    #[test]
    fn test_end_of_input_during_add_exits_without_adding() {
        let store = MemoryStore::new();
        run(&store, "1\nAna\n20\n9\n");

        assert!(store.is_empty());
    }

    #[test]
    fn test_undecodable_name_is_rejected_and_menu_continues() {
        let store = MemoryStore::new();
        let mut output = Vec::new();
        let input: &[u8] = b"1\n\xff\xfe\n2\n4\n";

        Console::new(&store, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(store.is_empty());
        assert!(text.contains("Error: age and grades must be valid numbers."));
        assert!(text.contains("No students registered."));
        assert!(text.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_undecodable_menu_choice_is_invalid() {
        let store = MemoryStore::new();
        let mut output = Vec::new();
        let input: &[u8] = b"\xc3\x28\n4\n";

        Console::new(&store, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Invalid option, try again."));
        assert!(text.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_store_errors_are_reported_and_loop_continues() {
        let text = run(&BrokenStore, "1\nAna\n20\n9\n9\n9\n2\n4\n");

        assert!(text.contains("Error writing to file:"));
        assert!(!text.contains("Student added successfully."));
        assert!(text.contains("Error reading data:"));
        assert!(text.contains("Name: Ana | Age: 20"));
        assert!(text.ends_with("Exiting...\n"));
    }
}
