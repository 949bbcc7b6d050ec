use card_advisor::preferences::{
    parse_amount_answer, parse_yes_no, BankingChannel, PreferenceError, PreferenceRecord,
    RepaymentBehavior, RewardType, SpendingCategory, YES_NO_OPTIONS,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const DEFAULT_FEE_COMFORT: &str = "2000";
const DEFAULT_MIN_CREDIT_LIMIT: &str = "100000";

struct Question {
    number: u8,
    text: &'static str,
    options: Option<&'static [&'static str]>,
    default: Option<&'static str>,
}

impl Question {
    const fn choice(number: u8, text: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            number,
            text,
            options: Some(options),
            default: None,
        }
    }

    const fn amount(number: u8, text: &'static str, default: &'static str) -> Self {
        Self {
            number,
            text,
            options: None,
            default: Some(default),
        }
    }

    fn prompt(&self) -> String {
        let mut prompt = format!("{}. {}", self.number, self.text);
        if let Some(options) = self.options {
            prompt.push_str(&format!(" [{}]", options.join("/")));
        }
        if let Some(default) = self.default {
            prompt.push_str(&format!(" (default {default})"));
        }
        prompt.push_str(": ");
        prompt
    }
}

/// Ask the eight questions in order, re-asking any question whose answer does not parse.
pub(crate) fn collect_preferences<R, W>(input: &mut R, out: &mut W) -> io::Result<PreferenceRecord>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Answer a few questions to find your best credit cards.")?;

    let spending_category = ask(
        input,
        out,
        &Question::choice(
            1,
            "What do you spend the most on?",
            SpendingCategory::OPTIONS,
        ),
        SpendingCategory::from_str,
    )?;
    let repayment = ask(
        input,
        out,
        &Question::choice(
            2,
            "Do you usually pay bills on time or delay?",
            RepaymentBehavior::OPTIONS,
        ),
        RepaymentBehavior::from_str,
    )?;
    let fee_comfort = ask(
        input,
        out,
        &Question::amount(
            3,
            "What is your max acceptable annual fee (₹)?",
            DEFAULT_FEE_COMFORT,
        ),
        |raw| parse_amount_answer("fee comfort", raw),
    )?;
    let reward_type = ask(
        input,
        out,
        &Question::choice(4, "What's your preferred reward type?", RewardType::OPTIONS),
        RewardType::from_str,
    )?;
    let min_credit_limit = ask(
        input,
        out,
        &Question::amount(
            5,
            "What's your expected minimum credit limit (₹)?",
            DEFAULT_MIN_CREDIT_LIMIT,
        ),
        |raw| parse_amount_answer("minimum credit limit", raw),
    )?;
    let international_usage = ask(
        input,
        out,
        &Question::choice(
            6,
            "Do you travel internationally or shop in USD/EUR online?",
            YES_NO_OPTIONS,
        ),
        |raw| parse_yes_no("international usage", raw),
    )?;
    let wants_emi = ask(
        input,
        out,
        &Question::choice(
            7,
            "Do you prefer EMI conversion for big purchases?",
            YES_NO_OPTIONS,
        ),
        |raw| parse_yes_no("EMI preference", raw),
    )?;
    let banking_channel = ask(
        input,
        out,
        &Question::choice(
            8,
            "Do you prefer digital-first cards or branch access?",
            BankingChannel::OPTIONS,
        ),
        BankingChannel::from_str,
    )?;

    Ok(PreferenceRecord {
        spending_category,
        repayment,
        fee_comfort,
        reward_type,
        min_credit_limit,
        international_usage,
        wants_emi,
        banking_channel,
    })
}

fn ask<R, W, T, F>(input: &mut R, out: &mut W, question: &Question, parse: F) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, PreferenceError>,
{
    loop {
        write!(out, "{}", question.prompt())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before every question was answered",
            ));
        }

        let answer = match (line.trim(), question.default) {
            ("", Some(default)) => default,
            ("", None) => {
                writeln!(out, "   Please answer this question.")?;
                continue;
            }
            (answer, _) => answer,
        };

        match parse(answer) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(out, "   {err}")?,
        }
    }
}
