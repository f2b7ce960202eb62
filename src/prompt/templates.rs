use super::engine::TemplateEngine;
use crate::error::PromptError;
use crate::session::reply::{Action, SaveFlag};
use chrono::NaiveDate;
use serde_json::{Value, json};
use strum::VariantNames;
use tera::Context;

pub const GREETING: &str =
    "Hi, I am your productivity assistant! I can create calendar events and to-dos for you, or just talk things through. :)";

const SYSTEM_CONTEXT: &str = r"
You are an assistant that creates Google Calendar events and to-dos for the user.
You know a great deal about time management, productivity, self development, learning,
health and training. You are kind and motivating, a wise personal coach whose only goal
is to help the user.

After reading the user's message decide which action they want. The possible actions
are: {{ actions }}. If the user leaves details out, leave those fields out as well and
only include what they actually wrote. Never ask follow-up questions; do what was asked.

Also decide whether the user wants the event saved to a file. Only answer Yes if they
say so explicitly. save can only be Yes when the action is Event. The possible values
for save are: {{ save_options }}.

Reply with nothing but a JSON object in the format below, never anything else. Omit any
field you cannot fill in, and only write what is certain.

The user's time zone is {{ time_zone }} and today's date is {{ date }}.

{{ examples }}";

const REMINDER: &str = r"
This is a reminder of your job. Keep to the rules you were given at the start of the
conversation, do only what is asked and give the best answer you can. Reply only with a
JSON object in the specified format.

{{ examples }}";

const EXPORT_INSTRUCTION: &str = r"
The user would also like a .ics file for the event from their previous message.
Write it so it can be saved to a file as-is and imported into Google Calendar as an
event. Write nothing except the .ics file contents.";

/// The three instruction texts the session sends to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompts {
    /// Pinned first entry of every conversation log.
    pub system_context: String,
    /// Re-sent every `reminder_interval` queries.
    pub reminder: String,
    /// Closing instruction of the reduced export log.
    pub export_instruction: String,
}

impl Prompts {
    pub fn render(time_zone: &str, date: NaiveDate) -> Result<Self, PromptError> {
        let engine = TemplateEngine::with_templates(&[
            ("system_context", SYSTEM_CONTEXT),
            ("reminder", REMINDER),
            ("export_instruction", EXPORT_INSTRUCTION),
        ])?;

        let mut ctx = Context::new();
        ctx.insert("actions", &Action::VARIANTS.join(", "));
        ctx.insert("save_options", &SaveFlag::VARIANTS.join(", "));
        ctx.insert("time_zone", time_zone);
        ctx.insert("date", &date.format("%Y-%m-%d").to_string());
        ctx.insert("examples", &reply_examples(time_zone));

        Ok(Self {
            system_context: engine.render("system_context", &ctx)?.trim().to_string(),
            reminder: engine.render("reminder", &ctx)?.trim().to_string(),
            export_instruction: engine.render("export_instruction", &ctx)?.trim().to_string(),
        })
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One example reply per action, shown to the model as the output contract.
fn reply_examples(time_zone: &str) -> String {
    let event = json!({
        "save": "No",
        "action": "Event",
        "dialog": "<what you would say to the user after doing what they asked>",
        "response": {
            "summary": "My Event",
            "location": "Somewhere Online",
            "description": "Some more details on this event",
            "colorId": "6",
            "start": {"dateTime": "2024-03-03T09:00:00+01:00", "timeZone": time_zone},
            "end": {"dateTime": "2024-03-03T11:00:00+01:00", "timeZone": time_zone},
            "recurrence": ["RRULE:FREQ=DAILY;COUNT=3"],
            "attendees": [{"email": "someone@example.com"}]
        }
    });
    let todo = json!({
        "action": "Todo",
        "dialog": "<what you would say to the user after doing what they asked>",
        "response": {
            "title": "New Task Title",
            "notes": "This is a note.",
            "due": "2024-03-04T09:00:00+01:00"
        }
    });
    let advice = json!({
        "action": "Advice",
        "dialog": "<your full answer to the user>"
    });

    format!(
        "Reply format when the user asks for an Event:\n{}\n\nReply format when the user asks for a Todo:\n{}\n\nReply format when the user asks for Advice:\n{}",
        pretty(&event),
        pretty(&todo),
        pretty(&advice)
    )
}
