//! Canned advisory responses returned by the keyword hierarchy.
//!
//! The register (headed sections, bullet lists, emoji markers) follows the
//! assistant texts shipped with the original product.

pub(crate) const WHEAT_PLANTING: &str = "\u{1F33E} Wheat Planting Timing\n\n\
• Winter wheat: sow in late fall, 6-8 weeks before the first hard frost, so plants tiller before dormancy\n\
• Spring wheat: sow in early spring as soon as soil reaches 4-5\u{00B0}C and can be worked\n\
• Target a seeding depth of 3-5 cm into moist soil; shallower in heavy clay\n\
• Aim for 250-350 viable seeds per square meter, increasing 10-15% for late sowing\n\n\
Check your local extension service for variety-specific windows in your region.";

pub(crate) const WHEAT_YIELD: &str = "\u{1F33E} Improving Wheat Yield\n\n\
• Use certified seed of a variety proven in your climate zone\n\
• Split nitrogen applications: at sowing, tillering, and stem extension\n\
• Control weeds early; wheat competes poorly in its first 30 days\n\
• Scout for rust and septoria from tillering onward and treat promptly\n\
• Rotate with legumes or oilseeds to break disease cycles and fix nitrogen\n\n\
Well-managed fields commonly gain 15-25% over continuous unmanaged wheat.";

pub(crate) const WHEAT_FERTILIZER: &str = "\u{1F9EA} Wheat Fertilization\n\n\
• Base dressing: apply phosphorus and potassium per soil test before sowing\n\
• Nitrogen: 100-150 kg/ha total for bread wheat, split over 2-3 applications\n\
• Top-dress at tillering for tiller count, at stem extension for grain protein\n\
• Avoid late heavy nitrogen: it delays ripening and invites lodging\n\n\
A soil test every 2-3 years pays for itself in saved fertilizer.";

pub(crate) const WHEAT_GENERAL: &str = "\u{1F33E} Wheat Growing Guide\n\n\
Wheat thrives in cool-season climates with 400-750 mm of rain and well-drained loam.\n\n\
• Prepare a firm, fine seedbed and sow at a consistent 3-5 cm depth\n\
• Feed according to soil tests, with nitrogen split across the season\n\
• Watch for rusts, aphids, and weeds during early growth\n\
• Harvest at 13-15% grain moisture for safe storage\n\n\
Ask me about wheat planting timing, improving yield, or fertilization for details.";

pub(crate) const CORN_PLANTING: &str = "\u{1F33D} Corn Planting\n\n\
• Sow when soil temperature holds above 10\u{00B0}C at seeding depth for three days\n\
• Plant 4-5 cm deep, into moisture, with 20-25 cm in-row spacing\n\
• Use 70-75 cm rows; tighter rows suit short-season hybrids\n\
• Choose hybrid maturity to match your frost-free window\n\n\
Late sowing costs roughly 1% of yield per day after the optimal window closes.";

pub(crate) const CORN_FERTILIZER: &str = "\u{1F9EA} Corn Fertilization\n\n\
• Corn is a heavy nitrogen feeder: budget 150-200 kg N/ha for grain crops\n\
• Apply a starter (NP) at planting, then side-dress nitrogen at the V6 stage\n\
• Maintain potassium for stalk strength and drought tolerance\n\
• Add zinc where soils are alkaline or phosphorus applications are high\n\n\
Split applications cut losses to leaching and keep nitrogen where roots feed.";

pub(crate) const CORN_PEST: &str = "\u{1F41B} Corn Pest Control\n\n\
• Scout weekly for armyworm, stem borer, and earworm from emergence\n\
• Treat borers early: once larvae enter the stalk, sprays no longer reach them\n\
• Encourage natural enemies with field margins and reduced broad-spectrum sprays\n\
• Rotate crops and remove stalk residue to break borer life cycles\n\n\
Integrated pest management keeps control costs down and protects pollinators.";

pub(crate) const CORN_GENERAL: &str = "\u{1F33D} Corn (Maize) Growing Guide\n\n\
Corn does best with warm summers, 500-800 mm of water, and deep fertile soil.\n\n\
• Sow into warm soil and keep fields weed-free for the first six weeks\n\
• Meet its high nitrogen demand with split applications\n\
• Ensure water supply at tasseling and silking, the critical yield stages\n\
• Harvest grain corn at 20-25% moisture and dry to 14% for storage\n\n\
Ask me about corn planting, fertilization, or pest control for specifics.";

pub(crate) const RICE_GENERAL: &str = "\u{1F35A} Rice Growing Guide\n\n\
Rice needs warm temperatures (20-35\u{00B0}C) and dependable water throughout the season.\n\n\
• Transplant 20-25 day old seedlings into puddled soil, 2-3 per hill\n\
• Keep 2-5 cm of standing water from establishment to grain filling\n\
• Apply nitrogen in three splits: basal, tillering, and panicle initiation\n\
• Drain fields 7-10 days before harvest to firm the ground\n\
• Alternate wetting and drying saves 15-30% of irrigation water where drainage allows\n\n\
Watch for blast and stem borer; resistant varieties are the cheapest control.";

pub(crate) const TOMATO_DISEASE: &str = "\u{1F345} Tomato Disease Management\n\n\
• Early and late blight: avoid overhead watering and apply copper or chlorothalonil preventively in humid spells\n\
• Fusarium and verticillium wilt: plant resistant varieties (look for VF codes) and rotate 3+ years\n\
• Leaf spot: strip infected lower leaves, mulch to stop soil splash\n\
• Stake or cage plants so foliage dries quickly after rain\n\n\
Sanitation matters: remove and destroy infected material, never compost it.";

pub(crate) const TOMATO_WATERING: &str = "\u{1F4A7} Tomato Watering\n\n\
• Give 25-40 mm of water per week, deeply and infrequently, at the base of the plant\n\
• Keep moisture even: swings between dry and soaked cause blossom end rot and fruit cracking\n\
• Drip lines under mulch cut evaporation and keep foliage dry\n\
• Reduce watering as fruit ripens to concentrate flavor\n\n\
Morning watering gives leaves time to dry and cuts fungal pressure.";

pub(crate) const TOMATO_GENERAL: &str = "\u{1F345} Tomato Growing Guide\n\n\
Tomatoes want full sun, warm nights above 13\u{00B0}C, and rich, well-drained soil.\n\n\
• Transplant sturdy seedlings after the last frost, burying two-thirds of the stem\n\
• Feed with balanced fertilizer at planting, then higher potassium from first fruit set\n\
• Stake or cage early and prune suckers on indeterminate varieties\n\
• Mulch to hold moisture and keep fruit off the soil\n\n\
Ask me about tomato diseases or watering for targeted advice.";

pub(crate) const SOIL_GENERAL: &str = "\u{1F331} Soil & Fertility Management\n\n\
• Start with a soil test: pH and N-P-K levels decide everything else\n\
• Most crops want pH 6.0-7.0; lime acidic soils, add sulfur to alkaline ones\n\
• Build organic matter with compost, manure, and cover crops; 1% more organic matter holds ~20,000 more liters of water per hectare\n\
• Apply NPK to replace what the harvest removes, not by habit\n\
• Avoid working wet soil; compaction takes years to undo\n\n\
Healthy soil is the cheapest yield insurance you can buy.";

pub(crate) const PEST_GENERAL: &str = "\u{1F41B} Pest & Disease Control\n\n\
• Identify before you treat: most sprays fail because the target was wrong\n\
• Scout twice a week and act on thresholds, not on sight of a single insect\n\
• Prefer integrated control: resistant varieties, rotation, beneficial insects, then targeted chemicals\n\
• Rotate modes of action to slow resistance\n\
• Always follow label rates and pre-harvest intervals for safety\n\n\
Your local extension service can confirm identification from a photo or sample.";

pub(crate) const WATER_GENERAL: &str = "\u{1F4A7} Water & Irrigation Management\n\n\
• Irrigate by crop stage: most crops are most sensitive at flowering and grain filling\n\
• Drip irrigation reaches 90%+ efficiency versus ~60% for furrow systems\n\
• Water deeply and less often to push roots down\n\
• Mulch and residue cover cut evaporation losses sharply\n\
• In drought, prioritize the critical stages and accept stress elsewhere\n\n\
A simple soil moisture probe beats guessing and commonly saves 20%+ of water.";

pub(crate) const ORGANIC_GENERAL: &str = "\u{1F33F} Organic & Sustainable Farming\n\n\
• Feed the soil: compost, green manures, and rotation with legumes replace synthetic nitrogen\n\
• Manage pests with diversity: intercropping, trap crops, and beneficial habitat\n\
• Approved inputs like neem, Bt, and copper cover most pest and disease gaps\n\
• Certification typically requires a 2-3 year transition; keep records from day one\n\
• Expect lower yields at first and a premium price once certified\n\n\
Start the transition on one field, learn, then scale what works.";

/// Terminal branch of the hierarchy: echo the question and summarize what
/// the assistant can answer deterministically.
pub(crate) fn fallback_response(message: &str) -> String {
    format!(
        "\u{1F33E} I received your question: \"{message}\"\n\n\
         I can offer specific guidance on these topics:\n\n\
         • Crop guides: wheat, corn (maize), rice, and tomatoes\n\
         • Soil management and fertilization\n\
         • Pest and disease control\n\
         • Water and irrigation planning\n\
         • Organic and sustainable practices\n\n\
         Try asking about one of those, for example \"When should I plant wheat?\" \
         or \"How do I control pests naturally?\""
    )
}
