use card_advisor::advisor::{CardFeatures, RecommendationView, ShortlistView};
use card_advisor::ranking::FilterPass;
use std::io::{self, Write};

const SEPARATOR_WIDTH: usize = 80;

pub(crate) fn write_recommendations<W: Write>(
    out: &mut W,
    recommendations: &[RecommendationView],
) -> io::Result<()> {
    if recommendations.is_empty() {
        writeln!(out, "No credit cards matched your preferences.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Top {} Credit Card Recommendations",
        recommendations.len()
    )?;
    writeln!(out)?;

    for view in recommendations {
        writeln!(out, "{}. {}", view.rank, view.name)?;
        writeln!(out, "   Score: {:.1}/{:.1}", view.score, view.max_score)?;
        writeln!(out, "   Why This Card: {}", view.rationale)?;
        write_features(out, &view.features)?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    Ok(())
}

pub(crate) fn write_shortlist<W: Write>(out: &mut W, shortlist: &ShortlistView) -> io::Result<()> {
    let pass = match shortlist.pass {
        FilterPass::Strict => "strict",
        FilterPass::Relaxed => "relaxed",
    };
    writeln!(
        out,
        "Shortlist ({pass} filter, {} strict matches)",
        shortlist.strict_matches
    )?;

    if shortlist.cards.is_empty() {
        writeln!(out, "No credit cards matched your constraints.")?;
        return Ok(());
    }
    writeln!(out)?;

    for (index, card) in shortlist.cards.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, card.name)?;
        write_features(out, &card.features)?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    Ok(())
}

fn write_features<W: Write>(out: &mut W, features: &CardFeatures) -> io::Result<()> {
    let entries = features.entries();
    if entries.is_empty() {
        return Ok(());
    }
    writeln!(out, "   Features:")?;
    for (label, value) in entries {
        writeln!(out, "   - {label}: {value}")?;
    }
    Ok(())
}
