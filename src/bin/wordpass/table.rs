use std::fmt::{self, Display};
use std::io::{self, Write};

use anyhow::Context;
use unicode_width::UnicodeWidthStr;

use wordpass::Generator;

pub(crate) static RULE: &str = "-------------------------------------------------";

struct Setting {
    name: &'static str,
    value: String,
}

/// Print the generator's effective settings as a two-column table.
pub(crate) fn display_settings(generator: &Generator, output: impl Write) -> anyhow::Result<()> {
    let config = generator.config();
    let wordlist = match (config.alt_list.as_ref(), config.merge_list.as_ref()) {
        (Some(alt), _) => alt.display().to_string(),
        (None, Some(merge)) => format!("built-in + {}", merge.display()),
        (None, None) => String::from("built-in"),
    };
    let separators = if config.separator_pool.is_empty() {
        String::from("+-_! (default)")
    } else {
        config.separator_pool.clone()
    };
    let rows = [
        Setting {
            name: "Words",
            value: config.word_count.to_string(),
        },
        Setting {
            name: "Separator blocks",
            value: config.separator_count.to_string(),
        },
        Setting {
            name: "Separators",
            value: separators,
        },
        Setting {
            name: "Digits per block",
            value: config.digit_range.clone(),
        },
        Setting {
            name: "Typo rate",
            value: config.typo_rate.to_string(),
        },
        Setting {
            name: "Capitalization",
            value: config.caps.to_string(),
        },
        Setting {
            name: "Wordlist",
            value: wordlist,
        },
    ];
    display_table(&rows, output).context("failed to output settings table")
}

fn display_table(rows: &[Setting], mut output: impl Write) -> io::Result<()> {
    let headers = ["Setting", "Value"];
    let mut column_widths = headers.map(|h| h.width());
    for row in rows {
        column_widths[0] = std::cmp::max(row.name.width(), column_widths[0]);
        column_widths[1] = std::cmp::max(row.value.width(), column_widths[1]);
    }

    writeln!(
        output,
        "{}  {}",
        Padded(headers[0], column_widths[0]),
        Padded(headers[1], column_widths[1])
    )?;
    writeln!(
        output,
        "{}  {}",
        Divider(column_widths[0]),
        Divider(column_widths[1])
    )?;
    for row in rows {
        writeln!(
            output,
            "{}  {}",
            Padded(row.name, column_widths[0]),
            Padded(&row.value, column_widths[1])
        )?;
    }
    Ok(())
}

struct Divider(usize);

impl Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            write!(f, "─")?;
        }
        Ok(())
    }
}

struct Padded<'a>(&'a str, usize);

impl Display for Padded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.1.saturating_sub(self.0.width());
        write!(f, "{}", self.0)?;
        for _ in 0..padding {
            write!(f, " ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_line_up() {
        let rows = [
            Setting {
                name: "Words",
                value: String::from("4"),
            },
            Setting {
                name: "Separators",
                value: String::from("+-_!"),
            },
        ];
        let mut out = Vec::new();
        display_table(&rows, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Setting     Value");
        assert_eq!(lines[1], "──────────  ─────");
        assert_eq!(lines[2], "Words       4    ");
        assert_eq!(lines[3], "Separators  +-_! ");
    }
}
