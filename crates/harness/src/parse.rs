//! Parser for harness case files.
//!
//! A case file is line-oriented. Blank lines and `#` comments are
//! ignored; every other line is a leader character, one space, and a
//! parameter:
//!
//! - `= <name>` — start a new test case
//! - `@ <line>` — the line to start execution at (>= FIRST_USER)
//! - `^ <n...>` — initial data stack, bottom to top
//! - `v <n...>` — expected final data stack, bottom to top

use fortytwo_vm::{opcode, Cell};

use crate::error::HarnessError;

/// One test case from a `.f42t` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub start_line: Cell,
    /// Values seeded onto the data stack, bottom to top.
    pub input: Vec<Cell>,
    /// Expected final data stack, bottom to top.
    pub expected: Vec<Cell>,
}

/// A case under construction; the start line arrives separately.
struct CaseBuilder {
    name: String,
    start_line: Option<Cell>,
    input: Vec<Cell>,
    expected: Vec<Cell>,
}

impl CaseBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start_line: None,
            input: Vec::new(),
            expected: Vec::new(),
        }
    }

    fn finish(self, file: &str) -> Result<TestCase, HarnessError> {
        let start_line = self.start_line.ok_or_else(|| HarnessError::MissingStartLine {
            file: file.to_string(),
            name: self.name.clone(),
        })?;
        Ok(TestCase {
            name: self.name,
            start_line,
            input: self.input,
            expected: self.expected,
        })
    }
}

/// Parse a whole case file. Returns the first error encountered.
pub fn parse_cases(text: &str, file: &str) -> Result<Vec<TestCase>, HarnessError> {
    let mut cases = Vec::new();
    let mut current: Option<CaseBuilder> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_start();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (leader, rest) = split_leader(line, file, line_no)?;
        let param = rest.trim();

        match leader {
            '=' => {
                if let Some(builder) = current.take() {
                    cases.push(builder.finish(file)?);
                }
                current = Some(CaseBuilder::new(param));
            }
            '@' => {
                let case = declared(&mut current, file, line_no)?;
                let start: Cell =
                    param.parse().map_err(|_| HarnessError::BadStartLine {
                        file: file.to_string(),
                        line: line_no,
                        token: param.to_string(),
                    })?;
                if start < opcode::FIRST_USER {
                    return Err(HarnessError::StartLineTooLow {
                        file: file.to_string(),
                        line: line_no,
                        start,
                    });
                }
                case.start_line = Some(start);
            }
            '^' => {
                let case = declared(&mut current, file, line_no)?;
                parse_numbers(param, &mut case.input, file, line_no)?;
            }
            'v' => {
                let case = declared(&mut current, file, line_no)?;
                parse_numbers(param, &mut case.expected, file, line_no)?;
            }
            other => {
                return Err(HarnessError::BadLeader {
                    file: file.to_string(),
                    line: line_no,
                    leader: other,
                });
            }
        }
    }

    if let Some(builder) = current {
        cases.push(builder.finish(file)?);
    }
    Ok(cases)
}

/// Split off the leader character and require the following space.
fn split_leader<'a>(
    line: &'a str,
    file: &str,
    line_no: usize,
) -> Result<(char, &'a str), HarnessError> {
    let mut chars = line.char_indices();
    let Some((_, leader)) = chars.next() else {
        return Err(HarnessError::MissingLeader {
            file: file.to_string(),
            line: line_no,
        });
    };
    match chars.next() {
        None => Err(HarnessError::MissingLeader {
            file: file.to_string(),
            line: line_no,
        }),
        Some((pos, ' ')) => Ok((leader, &line[pos + 1..])),
        Some(_) => Err(HarnessError::MissingSpace {
            file: file.to_string(),
            line: line_no,
        }),
    }
}

fn declared<'a>(
    current: &'a mut Option<CaseBuilder>,
    file: &str,
    line_no: usize,
) -> Result<&'a mut CaseBuilder, HarnessError> {
    current.as_mut().ok_or_else(|| HarnessError::NoTestDeclared {
        file: file.to_string(),
        line: line_no,
    })
}

fn parse_numbers(
    param: &str,
    into: &mut Vec<Cell>,
    file: &str,
    line_no: usize,
) -> Result<(), HarnessError> {
    for token in param.split_whitespace() {
        let value: Cell = token.parse().map_err(|_| HarnessError::BadNumber {
            file: file.to_string(),
            line: line_no,
            token: token.to_string(),
        })?;
        into.push(value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_cases() {
        let text = "\
# a comment
= Test 0
@ 21
^ 0 1 2 3
v 4 5 6 7

= Test 1
@ 22
^ 3 2 1 0
v 7 6 5
";
        let cases = parse_cases(text, "cases.f42t").unwrap();
        assert_eq!(cases.len(), 2);

        assert_eq!(cases[0].name, "Test 0");
        assert_eq!(cases[0].start_line, 21);
        assert_eq!(cases[0].input, vec![0, 1, 2, 3]);
        assert_eq!(cases[0].expected, vec![4, 5, 6, 7]);

        assert_eq!(cases[1].name, "Test 1");
        assert_eq!(cases[1].start_line, 22);
        assert_eq!(cases[1].input, vec![3, 2, 1, 0]);
        assert_eq!(cases[1].expected, vec![7, 6, 5]);
    }

    #[test]
    fn input_and_expected_lines_are_optional() {
        let cases = parse_cases("= bare\n@ 21\n", "cases.f42t").unwrap();
        assert_eq!(cases[0].input, Vec::<Cell>::new());
        assert_eq!(cases[0].expected, Vec::<Cell>::new());
    }

    #[test]
    fn directives_before_a_test_are_rejected() {
        for text in ["@ 21\n", "^ 21\n", "v 21\n"] {
            let err = parse_cases(text, "cases.f42t").unwrap_err();
            assert_eq!(
                err,
                HarnessError::NoTestDeclared {
                    file: "cases.f42t".to_string(),
                    line: 1,
                }
            );
        }
    }

    #[test]
    fn bad_start_lines_are_rejected() {
        let err = parse_cases("= t\n@ xxx\n", "cases.f42t").unwrap_err();
        assert_eq!(
            err,
            HarnessError::BadStartLine {
                file: "cases.f42t".to_string(),
                line: 2,
                token: "xxx".to_string(),
            }
        );

        let err = parse_cases("= t\n@ 12\n", "cases.f42t").unwrap_err();
        assert_eq!(
            err,
            HarnessError::StartLineTooLow {
                file: "cases.f42t".to_string(),
                line: 2,
                start: 12,
            }
        );
    }

    #[test]
    fn bad_stack_numbers_are_rejected() {
        for text in ["= t\n^ 1 2 3 4 xx\n", "= t\nv 1 2 3 4 xx\n"] {
            let err = parse_cases(text, "cases.f42t").unwrap_err();
            assert_eq!(
                err,
                HarnessError::BadNumber {
                    file: "cases.f42t".to_string(),
                    line: 2,
                    token: "xx".to_string(),
                }
            );
        }
    }

    #[test]
    fn malformed_leaders_are_rejected() {
        assert_eq!(
            parse_cases("=\n", "cases.f42t").unwrap_err(),
            HarnessError::MissingLeader {
                file: "cases.f42t".to_string(),
                line: 1,
            }
        );
        assert_eq!(
            parse_cases("=x\n", "cases.f42t").unwrap_err(),
            HarnessError::MissingSpace {
                file: "cases.f42t".to_string(),
                line: 1,
            }
        );
        assert_eq!(
            parse_cases("! boom\n", "cases.f42t").unwrap_err(),
            HarnessError::BadLeader {
                file: "cases.f42t".to_string(),
                line: 1,
                leader: '!',
            }
        );
    }

    #[test]
    fn a_case_without_a_start_line_is_rejected() {
        let err = parse_cases("= headless\nv 1\n", "cases.f42t").unwrap_err();
        assert_eq!(
            err,
            HarnessError::MissingStartLine {
                file: "cases.f42t".to_string(),
                name: "headless".to_string(),
            }
        );
    }
}
