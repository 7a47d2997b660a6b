//! Built-in sample content

use crate::types::{Catalog, Chapter, Verse};

/// Route segment of the built-in text
pub const GITA_TEXT_ID: &str = "gita";

/// The bundled Bhagavad Gita sample: chapter 1, verses 1-2
pub fn bhagavad_gita() -> Catalog {
    let chapter = Chapter::new(1, "Arjuna's Dilemma")
        .with_sanskrit_title("अर्जुन उवाच")
        .with_verses(vec![
            Verse::new(
                "दृष्ट्वा तु पाण्डवानीकं व्यूढं दुर्योधनस्तदा।\nआचार्यमुपसंगम्य राजा वचनमब्रवीत्॥",
                "dṛṣṭvā tu pāṇḍavānīkaṃ vyūḍhaṃ duryodhanas tadā\nācāryam upasaṅgamya rājā vacanam abravīt",
                "Seeing the Pandava army arranged in battle formation, King Duryodhana approached his teacher Drona and spoke these words.",
            )
            .with_commentary(
                "yogananda",
                "In this opening verse, we see the beginning of the great spiritual battle that is about to unfold. Duryodhana represents the ego-mind, while the Pandavas represent the forces of righteousness within us.",
            )
            .with_commentary(
                "easwaran",
                "The Gita begins not with philosophy but with a crisis. This is how spiritual growth often begins - in moments of great difficulty and moral confusion.",
            ),
            Verse::new(
                "पश्यैतां पाण्डुपुत्राणामाचार्य महतीं चमूम्।\nव्यूढां द्रुपदपुत्रेण तव शिष्येण धीमता॥",
                "paśyaitāṃ pāṇḍu-putrāṇām ācārya mahatīṃ camūm\nvyūḍhāṃ drupada-putreṇa tava śiṣyeṇa dhīmatā",
                "Behold, O Teacher, this mighty army of the sons of Pandu, arrayed by the son of Drupada, your intelligent disciple.",
            )
            .with_commentary(
                "yogananda",
                "The 'mighty army' represents the disciplined spiritual forces within the devotee, organized by discrimination (Drupada's son represents discriminative intelligence).",
            )
            .with_commentary(
                "easwaran",
                "Here we see the importance of proper guidance and the organization of our inner resources for the spiritual battle ahead.",
            ),
        ]);

    match Catalog::new(GITA_TEXT_ID, "Bhagavad Gita", vec![chapter]) {
        Ok(catalog) => catalog,
        // The literal above satisfies every catalog rule
        Err(e) => unreachable!("built-in catalog is invalid: {e}"),
    }
}
