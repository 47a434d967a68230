//! Interactive project calculator
//!
//! Drives a [`Calculator`] session from line-based input. Each step's options
//! can be picked by number; every command also accepts an explicit id.
//!
//! ```text
//! next | n              go to the next step
//! back | b              go to the previous step
//! <N>                   pick option N of the current step
//! a<N>                  toggle add-on N (step 3)
//! direction <id|N>      select a direction
//! package <id|N>        select a package
//! timeline <id|N>       select a timeline
//! addon <id|N>          toggle an add-on
//! currency <USD|EUR|CZK>
//! submit                send a proposal request (step 4)
//! quit | q              close the calculator
//! ```

use std::io::{BufRead, Write};

use crate::catalog::Catalog;
use crate::display::{format_estimate_card, format_step, CONTACT_PROMPTS};
use crate::error::{QuoteError, QuoteResult};
use crate::models::{AddonId, CurrencyId, DirectionId, PackageId, TimelineId};
use crate::wizard::{
    Calculator, ContactFields, SessionConfig, SubmissionRequest, Submitter, WizardEvent,
    WizardStep,
};

/// A parsed line of calculator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorCommand {
    Event(WizardEvent),
    Currency(CurrencyId),
    Submit,
    Help,
    Redraw,
    Quit,
}

/// How an interactive session ended
#[derive(Debug)]
pub enum CalculatorOutcome {
    /// Closed without sending anything
    Closed,
    /// A proposal request was handed to the submitter
    Submitted(Box<SubmissionRequest>),
}

const HELP: &str = "Commands: next (n), back (b), <number>, a<number>, direction <id>, \
package <id>, timeline <id>, addon <id>, currency <id>, submit, quit (q)";

/// Parse one line of input in the context of the current step
pub fn parse_command(
    line: &str,
    step: WizardStep,
    catalog: &Catalog,
    direction: &DirectionId,
) -> Result<CalculatorCommand, String> {
    let line = line.trim();
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, Some(arg.trim())),
        None => (line, None),
    };

    let command = match (word.to_lowercase().as_str(), arg) {
        ("", None) => CalculatorCommand::Redraw,
        ("n" | "next", None) => CalculatorCommand::Event(WizardEvent::Next),
        ("b" | "back", None) => CalculatorCommand::Event(WizardEvent::Back),
        ("q" | "quit" | "close", None) => CalculatorCommand::Quit,
        ("?" | "h" | "help", None) => CalculatorCommand::Help,
        ("submit" | "send", None) => CalculatorCommand::Submit,
        ("currency", Some(id)) => CalculatorCommand::Currency(CurrencyId::new(id.to_uppercase())),
        ("direction", Some(arg)) => {
            let ids: Vec<&DirectionId> = catalog.wizard_directions().iter().map(|d| &d.id).collect();
            CalculatorCommand::Event(WizardEvent::SelectDirection(pick(arg, &ids)?))
        }
        ("package", Some(arg)) => {
            let ids: Vec<&PackageId> = catalog.packages_for(direction).iter().map(|p| &p.id).collect();
            CalculatorCommand::Event(WizardEvent::SelectPackage(pick(arg, &ids)?))
        }
        ("timeline", Some(arg)) => {
            let ids: Vec<&TimelineId> = catalog.timelines().iter().map(|t| &t.id).collect();
            CalculatorCommand::Event(WizardEvent::SelectTimeline(pick(arg, &ids)?))
        }
        ("addon", Some(arg)) => {
            let ids: Vec<&AddonId> = catalog.addons().iter().map(|a| &a.id).collect();
            CalculatorCommand::Event(WizardEvent::ToggleAddon(pick(arg, &ids)?))
        }
        (shortcut, None) => return parse_shortcut(shortcut, step, catalog, direction),
        _ => return Err(format!("Unknown command '{}'. {}", line, HELP)),
    };

    Ok(command)
}

/// Numeric shortcuts pick from the current step's list
fn parse_shortcut(
    word: &str,
    step: WizardStep,
    catalog: &Catalog,
    direction: &DirectionId,
) -> Result<CalculatorCommand, String> {
    if let Some(number) = word.strip_prefix('a') {
        if step == WizardStep::TimelineAndAddons && number.parse::<usize>().is_ok() {
            let ids: Vec<&AddonId> = catalog.addons().iter().map(|a| &a.id).collect();
            return Ok(CalculatorCommand::Event(WizardEvent::ToggleAddon(pick(
                number, &ids,
            )?)));
        }
    }

    if word.parse::<usize>().is_err() {
        return Err(format!("Unknown command '{}'. {}", word, HELP));
    }

    let event = match step {
        WizardStep::Direction => {
            let ids: Vec<&DirectionId> = catalog.wizard_directions().iter().map(|d| &d.id).collect();
            WizardEvent::SelectDirection(pick(word, &ids)?)
        }
        WizardStep::Package => {
            let ids: Vec<&PackageId> = catalog.packages_for(direction).iter().map(|p| &p.id).collect();
            WizardEvent::SelectPackage(pick(word, &ids)?)
        }
        WizardStep::TimelineAndAddons => {
            let ids: Vec<&TimelineId> = catalog.timelines().iter().map(|t| &t.id).collect();
            WizardEvent::SelectTimeline(pick(word, &ids)?)
        }
        WizardStep::ContactRequest => {
            return Err("Nothing to pick on this step. Type 'submit' or 'back'.".into())
        }
    };

    Ok(CalculatorCommand::Event(event))
}

/// Resolve a 1-based option number, or take the argument as an id
fn pick<T>(arg: &str, options: &[&T]) -> Result<T, String>
where
    T: Clone + From<String>,
{
    match arg.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => Ok(options[n - 1].clone()),
        Ok(n) => Err(format!("No option {} (choose 1-{})", n, options.len())),
        Err(_) => Ok(T::from(arg.to_string())),
    }
}

/// Run an interactive calculator session until it is closed or submitted
pub fn run_calculator<R: BufRead, W: Write>(
    catalog: &Catalog,
    config: SessionConfig,
    mut input: R,
    out: &mut W,
    submitter: &mut dyn Submitter,
) -> QuoteResult<CalculatorOutcome> {
    let mut calc = Calculator::open(catalog, config);

    writeln!(out, "Project calculator")?;
    writeln!(
        out,
        "Indicative estimate. Final quote is confirmed after brief and scope alignment."
    )?;
    writeln!(out, "{}", HELP)?;
    render(&calc, out)?;

    loop {
        let Some(line) = read_line(&mut input, out, "> ")? else {
            calc.close();
            return Ok(CalculatorOutcome::Closed);
        };

        let step = calc.step();
        let direction = calc.selection().direction.clone();
        let command = match parse_command(&line, step, catalog, &direction) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        match command {
            CalculatorCommand::Event(event) => {
                if !calc.apply(event.clone()) {
                    match event {
                        WizardEvent::Back => writeln!(out, "Already on the first step.")?,
                        WizardEvent::Next => writeln!(out, "Already on the last step.")?,
                        _ => {}
                    }
                }
                render(&calc, out)?;
            }
            CalculatorCommand::Currency(currency) => {
                if catalog.currency(&currency).is_none() {
                    writeln!(out, "Unknown currency '{}', prices shown in USD.", currency)?;
                }
                calc.set_currency(currency);
                render(&calc, out)?;
            }
            CalculatorCommand::Submit => {
                if calc.step() != WizardStep::LAST {
                    writeln!(out, "Finish the earlier steps first ('next').")?;
                    continue;
                }

                let Some(contact) = read_contact(&mut input, out)? else {
                    calc.close();
                    return Ok(CalculatorOutcome::Closed);
                };

                if let Err(e) = contact.validate() {
                    writeln!(out, "{}", e)?;
                    continue;
                }

                match calc.submit(contact, submitter) {
                    Some(request) => {
                        writeln!(out, "Request sent. We reply in 24–48h.")?;
                        calc.close();
                        return Ok(CalculatorOutcome::Submitted(Box::new(request)));
                    }
                    None => writeln!(out, "Nothing was sent.")?,
                }
            }
            CalculatorCommand::Help => writeln!(out, "{}", HELP)?,
            CalculatorCommand::Redraw => render(&calc, out)?,
            CalculatorCommand::Quit => {
                calc.close();
                return Ok(CalculatorOutcome::Closed);
            }
        }
    }
}

fn render<W: Write>(calc: &Calculator<'_>, out: &mut W) -> QuoteResult<()> {
    writeln!(out)?;
    write!(out, "{}", format_step(calc))?;
    writeln!(out)?;
    write!(
        out,
        "{}",
        format_estimate_card(calc.catalog(), &calc.quote(), calc.currency())
    )?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` on end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> QuoteResult<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| QuoteError::Terminal(format!("Failed to read input: {}", e)))?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_contact<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> QuoteResult<Option<ContactFields>> {
    let mut answers = Vec::with_capacity(CONTACT_PROMPTS.len());
    for prompt in CONTACT_PROMPTS {
        match read_line(input, out, &format!("{}: ", prompt))? {
            Some(answer) => answers.push(answer),
            None => return Ok(None),
        }
    }

    let [name, email, link, brief]: [String; 4] = answers
        .try_into()
        .map_err(|_| QuoteError::Terminal("Incomplete contact form".into()))?;

    Ok(Some(ContactFields {
        name,
        email,
        project_link: if link.is_empty() { None } else { Some(link) },
        brief,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(line: &str, step: WizardStep) -> Result<CalculatorCommand, String> {
        parse_command(line, step, &Catalog::builtin(), &"logo".into())
    }

    fn session(script: &str) -> (CalculatorOutcome, String, Vec<SubmissionRequest>) {
        let catalog = Catalog::builtin();
        let config = SessionConfig {
            initial_direction: "logo".into(),
            currency: "USD".into(),
        };
        let mut out = Vec::new();
        let mut outbox: Vec<SubmissionRequest> = Vec::new();
        let outcome = run_calculator(
            &catalog,
            config,
            Cursor::new(script.to_string()),
            &mut out,
            &mut outbox,
        )
        .unwrap();
        (outcome, String::from_utf8(out).unwrap(), outbox)
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(
            parse("n", WizardStep::Direction),
            Ok(CalculatorCommand::Event(WizardEvent::Next))
        );
        assert_eq!(
            parse(" BACK ", WizardStep::Package),
            Ok(CalculatorCommand::Event(WizardEvent::Back))
        );
        assert_eq!(parse("q", WizardStep::Package), Ok(CalculatorCommand::Quit));
        assert_eq!(parse("", WizardStep::Package), Ok(CalculatorCommand::Redraw));
    }

    #[test]
    fn test_parse_number_depends_on_step() {
        assert_eq!(
            parse("6", WizardStep::Direction),
            Ok(CalculatorCommand::Event(WizardEvent::SelectDirection(
                "web-design".into()
            )))
        );
        assert_eq!(
            parse("3", WizardStep::Package),
            Ok(CalculatorCommand::Event(WizardEvent::SelectPackage("pro".into())))
        );
        assert_eq!(
            parse("2", WizardStep::TimelineAndAddons),
            Ok(CalculatorCommand::Event(WizardEvent::SelectTimeline("rush".into())))
        );
        assert!(parse("1", WizardStep::ContactRequest).is_err());
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = parse("7", WizardStep::Direction).unwrap_err();
        assert!(err.contains("choose 1-6"));
    }

    #[test]
    fn test_parse_addon_shortcut() {
        assert_eq!(
            parse("a2", WizardStep::TimelineAndAddons),
            Ok(CalculatorCommand::Event(WizardEvent::ToggleAddon("handoff".into())))
        );
        assert!(parse("a2", WizardStep::Direction).is_err());
    }

    #[test]
    fn test_parse_explicit_ids() {
        assert_eq!(
            parse("direction social", WizardStep::Package),
            Ok(CalculatorCommand::Event(WizardEvent::SelectDirection(
                "social".into()
            )))
        );
        assert_eq!(
            parse("addon hosting", WizardStep::Direction),
            Ok(CalculatorCommand::Event(WizardEvent::ToggleAddon("hosting".into())))
        );
        assert_eq!(
            parse("currency czk", WizardStep::Direction),
            Ok(CalculatorCommand::Currency("CZK".into()))
        );
        assert!(parse("fly away", WizardStep::Direction).is_err());
    }

    #[test]
    fn test_quit_closes_without_submitting() {
        let (outcome, output, outbox) = session("n\n3\nq\n");
        assert!(matches!(outcome, CalculatorOutcome::Closed));
        assert!(output.contains("Logo · Pro"));
        assert!(output.contains("$5,250"));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_end_of_input_closes() {
        let (outcome, _, outbox) = session("n\n");
        assert!(matches!(outcome, CalculatorOutcome::Closed));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_back_on_first_step_reports() {
        let (_, output, _) = session("b\nq\n");
        assert!(output.contains("Already on the first step."));
    }

    #[test]
    fn test_submit_before_last_step_is_refused() {
        let (_, output, outbox) = session("submit\nq\n");
        assert!(output.contains("Finish the earlier steps first"));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_full_session_submits() {
        let script = "6\nn\nn\n2\na2\na3\ncurrency eur\nn\nsubmit\nAda\nada@example.com\n\nNew marketing site\n";
        let (outcome, output, outbox) = session(script);

        let CalculatorOutcome::Submitted(request) = outcome else {
            panic!("expected a submission");
        };
        assert_eq!(request.quote.total.dollars(), 5975);
        assert_eq!(request.currency, "EUR");
        assert_eq!(request.contact.project_link, None);
        assert_eq!(outbox.len(), 1);
        assert!(output.contains("Web design · Standard"));
        assert!(output.contains("Request sent."));
    }

    #[test]
    fn test_invalid_contact_is_not_sent() {
        let script = "n\nn\nn\nsubmit\nAda\nnot-an-email\n\n\nq\n";
        let (outcome, output, outbox) = session(script);
        assert!(matches!(outcome, CalculatorOutcome::Closed));
        assert!(output.contains("not an email address"));
        assert!(outbox.is_empty());
    }
}
