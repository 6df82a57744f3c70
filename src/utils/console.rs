use std::io;
use std::io::{BufRead, Write};

// Reads one line with the trailing newline stripped; None at end of input.
pub(crate) fn read_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

// Prints a label on the output handle and reads the reply.
pub(crate) fn prompt(input: &mut dyn BufRead, output: &mut dyn Write, label: &str) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;
    read_line(input)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::utils::console::{prompt, read_line};

    #[test]
    fn test_should_read_trimmed_lines() {
        let mut input = Cursor::new("first line\r\nsecond\n".to_string());
        assert_eq!(Some("first line".to_string()), read_line(&mut input).expect("should read line"));
        assert_eq!(Some("second".to_string()), read_line(&mut input).expect("should read line"));
        assert_eq!(None, read_line(&mut input).expect("should read line"));
    }

    #[test]
    fn test_should_prompt_for_reply() {
        let mut input = Cursor::new("reply\n".to_string());
        let mut output = Vec::new();
        let reply = prompt(&mut input, &mut output, "Name: ").expect("should prompt");
        assert_eq!(Some("reply".to_string()), reply);
        assert_eq!("Name: ", String::from_utf8(output).expect("should render utf8 output").as_str());
    }
}
