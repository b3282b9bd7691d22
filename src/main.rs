use std::io::{stdin, stdout, Write};
use std::thread;

use mindmatrix::{Effect, Event, Flow, InfoForm, Rating, Screen, QUESTIONS};

fn main() {
    env_logger::init();

    let mut flow = Flow::new(&QUESTIONS);
    println!("MindMatrix — a short wellbeing check-in.");

    loop {
        let Some(event) = read_event(flow.screen()) else {
            break;
        };
        let effects = flow.dispatch(event);
        apply(&mut flow, effects);
    }
}

/// Perform each effect in order. `ScheduleAdvance` is the one suspension
/// point: sleep, then feed the elapsed timer back into the flow.
fn apply(flow: &mut Flow<'_>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::ScheduleAdvance(delay) => {
                thread::sleep(delay);
                let next = flow.dispatch(Event::AdvanceElapsed);
                apply(flow, next);
            }
            other => render(&other),
        }
    }
}

fn render(effect: &Effect) {
    match effect {
        Effect::ShowScreen(Screen::Welcome) => {
            println!();
            println!("Welcome back.");
        }
        Effect::ShowScreen(Screen::Info) => {
            println!();
            println!("First, tell us a little about yourself.");
        }
        Effect::ShowScreen(Screen::StartTracking) => {
            println!();
            println!("Thanks! You'll rate {} short statements from 1 to 5.", QUESTIONS.len());
        }
        Effect::ShowScreen(Screen::Score) => println!(),
        Effect::ShowScreen(_) => {}
        Effect::RenderQuestion {
            index,
            total,
            text,
            selected,
            finish_visible,
        } => {
            println!();
            println!("Question {} of {}", index + 1, total);
            println!("{text}");
            for rating in Rating::ALL {
                let mark = if *selected == Some(rating) { "*" } else { " " };
                println!(" {mark}{} => {}", rating.value(), rating.label());
            }
            if *finish_visible {
                println!("This is the last one. Answer it, then enter f to finish.");
            }
        }
        Effect::FieldErrors(errors) => {
            for error in errors {
                println!("  {}: {}", error.field.label(), error.message);
            }
        }
        Effect::PromptAnswerLast => {
            println!("Please select an answer before finishing.");
        }
        Effect::ShowScore(score) => {
            println!("Your wellbeing score: {score} / 100");
        }
        Effect::ShowReport(payload) => {
            println!();
            println!("{}", payload.title);
            println!("{}", payload.summary);
            println!();
            println!("{}", payload.heading);
            for suggestion in &payload.suggestions {
                println!("  - {suggestion}");
            }
        }
        Effect::ScheduleAdvance(_) => {}
    }
}

/// Turn the next line(s) of input into an event for the current screen.
/// `None` means the user chose to quit.
fn read_event(screen: Screen) -> Option<Event> {
    match screen {
        Screen::Welcome => {
            let line = read_line("Press enter to begin (q to quit): ");
            match line.as_str() {
                "q" => None,
                _ => Some(Event::Start),
            }
        }
        Screen::Info => Some(Event::SubmitInfo(read_info_form())),
        Screen::StartTracking => {
            read_line("Press enter to start the questionnaire: ");
            Some(Event::BeginQuestions)
        }
        Screen::Question { .. } => loop {
            let line = read_line("Your answer (1-5, f to finish, q to quit): ");
            match line.as_str() {
                "q" => return None,
                "f" => return Some(Event::Finish),
                other => match other.parse::<u8>().ok().and_then(|v| Rating::try_from(v).ok()) {
                    Some(rating) => return Some(Event::SelectAnswer(rating)),
                    None => println!("Answers go from 1 (strongly disagree) to 5 (strongly agree)."),
                },
            }
        },
        Screen::Score => {
            read_line("Press enter to see your report: ");
            Some(Event::SeeReport)
        }
        Screen::Report => {
            let line = read_line("Enter r to restart, anything else to quit: ");
            match line.as_str() {
                "r" => Some(Event::Restart),
                _ => None,
            }
        }
    }
}

fn read_info_form() -> InfoForm {
    InfoForm {
        name: read_line("Name: "),
        age: read_line("Age: "),
        gender: read_line("Gender (female/male/other): "),
        contact: read_line("Contact number: "),
        email: read_line("Email: "),
    }
}

fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    stdout().flush().unwrap();
    let mut buffer = String::new();
    stdin().read_line(&mut buffer).unwrap();
    buffer.trim().to_string()
}
