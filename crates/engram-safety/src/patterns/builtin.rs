//! Built-in safety pattern table, in evaluation order.
//!
//! Each entry is `(label, pattern)`. Several patterns may share a label.

pub const ALLERGY: &str = "allergy";
pub const MEDICATION: &str = "medication";
pub const MEDICAL_CONDITION: &str = "medical_condition";
pub const EMERGENCY: &str = "emergency";
pub const CRITICAL_SEVERITY: &str = "critical_severity";

pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    // ── Allergies ──────────────────────────────────────────────────────────
    (ALLERGY, r"\ballerg(?:y|ic|ies|ens?)\b"),
    (ALLERGY, r"\banaphyla(?:xis|ctic)\b"),
    (ALLERGY, r"\bintoleran(?:t|ce) to\b"),
    // ── Medications ────────────────────────────────────────────────────────
    (MEDICATION, r"\b(?:medications?|medicines?|prescriptions?|prescribed)\b"),
    (
        MEDICATION,
        r"\b(?:insulin|epi-?\s?pens?|inhalers?|warfarin|anticoagulants?|blood thinners?|antibiotics?)\b",
    ),
    (MEDICATION, r"\b\d+(?:\.\d+)?\s?(?:mg|mcg|ml)\b"),
    // ── Medical conditions ─────────────────────────────────────────────────
    (
        MEDICAL_CONDITION,
        r"\b(?:diabet(?:es|ic)|epilep(?:sy|tic)|asthma(?:tic)?|seizures?|hemophilia|celiac)\b",
    ),
    (
        MEDICAL_CONDITION,
        r"\b(?:heart (?:condition|disease|failure)|pacemaker|high blood pressure|hypertension)\b",
    ),
    // ── Emergency contacts and directives ──────────────────────────────────
    (EMERGENCY, r"\bemergency contacts?\b"),
    (EMERGENCY, r"\bin case of (?:an )?emergency\b"),
    (EMERGENCY, r"\b(?:do not resuscitate|dnr)\b"),
    (EMERGENCY, r"\bcall (?:911|112|999)\b"),
    // ── Severity keywords ──────────────────────────────────────────────────
    (
        CRITICAL_SEVERITY,
        r"\b(?:life[- ]threatening|fatal|deadly|severe(?:ly)?|critical(?:ly)?)\b",
    ),
];
