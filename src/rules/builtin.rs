//! Built-in rule set for the store's product catalogue.
//!
//! Order matters: specific phrases come before the catch-all terms that would
//! also match them. Categories containing `*חדש*` do not exist in the taxonomy
//! yet and must be created.

/// A rule as compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRule {
    pub keywords: &'static [&'static str],
    pub category: [&'static str; 4],
    pub note: Option<&'static str>,
}

const fn rule(keywords: &'static [&'static str], category: [&'static str; 4]) -> BuiltinRule {
    BuiltinRule {
        keywords,
        category,
        note: None,
    }
}

const fn noted(
    keywords: &'static [&'static str],
    category: [&'static str; 4],
    note: &'static str,
) -> BuiltinRule {
    BuiltinRule {
        keywords,
        category,
        note: Some(note),
    }
}

pub const BUILTIN_RULES: &[BuiltinRule] = &[
    // Purim / holidays
    rule(&["מגילת אסתר", "מגילות אסתר"], ["NF", "חגים", "פורים", "מגילות אסתר"]),
    rule(&["תחפושת", "מסכה"], ["NF", "חגים", "פורים", "תחפושות ואביזרים"]),
    rule(
        &["משלוח מנות", "שקית פורים", "קופסת פורים"],
        ["NF", "חגים", "פורים", "אביזרים למשלוחי מנות"],
    ),
    // catch-all for Purim after the specific rules above
    rule(&["פורים"], ["NF", "חגים", "פורים", "אביזרים למשלוחי מנות"]),
    rule(&["סביבון", "חנוכיה", "חנוכה"], ["NF", "חגים", "חנוכה", "סביבונים"]),
    rule(&["שקית חג", "שקיות חג"], ["NF", "חגים", "חגים כללי", "שקיות חג"]),
    noted(
        &["מדבקות לפסח", "פסח"],
        ["NF", "חגים", "חגים כללי", "שקיות חג"],
        "best fit available; no Passover subgroup exists yet",
    ),
    // Judaica
    rule(
        &["ציצית", "טלית", "פתיל", "פתילים"],
        ["NF", "יודאיקה *חדש*", "ציצית וטלית *חדש*", "פתילים וציצית *חדש*"],
    ),
    rule(
        &["מזוזה", "תפילין", "שופר"],
        ["NF", "יודאיקה *חדש*", "יודאיקה *חדש*", "יודאיקה *חדש*"],
    ),
    // Fresh herbs and roots, shelved with the nuts
    rule(&["חזרת"], ["פירות וירקות", "ירקות", "שורשיים", "שורש"]),
    rule(
        &["לוף"],
        ["פירות וירקות", "ירקות", "ירקות לבישול", "ירקות לבישול *חדש*"],
    ),
    rule(
        &["נענע", "כוסברה", "פטרוזיליה", "שמיר", "עשב"],
        ["פירות וירקות", "ירקות", "ירקות עלים", "פטרוזיליה כוסברה נענע שמיר"],
    ),
    // Nuts and seeds
    rule(
        &["בוטן", "בוטנים"],
        ["פירות וירקות", "פיצוחים", "בוטנים *חדש*", "בוטנים *חדש*"],
    ),
    rule(
        &["שקד", "שקדים"],
        ["פירות וירקות", "פיצוחים", "שקדים *חדש*", "שקדים *חדש*"],
    ),
    rule(
        &["פיסטוק"],
        ["פירות וירקות", "פיצוחים", "פיסטוק *חדש*", "פיסטוק *חדש*"],
    ),
    rule(
        &["קשיו"],
        ["פירות וירקות", "פיצוחים", "קשיו *חדש*", "קשיו *חדש*"],
    ),
    rule(
        &["פקאן"],
        ["פירות וירקות", "פיצוחים", "פקאן ומקדמיה *חדש*", "פקאן *חדש*"],
    ),
    rule(
        &["מקדמיה"],
        ["פירות וירקות", "פיצוחים", "פקאן ומקדמיה *חדש*", "מקדמיה *חדש*"],
    ),
    rule(
        &["בונדוק", "אגוז ברזיל", "אגוז"],
        ["פירות וירקות", "פיצוחים", "אגוזים *חדש*", "אגוזים *חדש*"],
    ),
    rule(
        &["גרעיני חמניה", "גרעיני אבטיח", "גרעיני דלעת", "גרעינים"],
        ["פירות וירקות", "פיצוחים", "גרעינים *חדש*", "גרעינים *חדש*"],
    ),
    rule(
        &["גרעינים דלעת", "גרעיני אבטיח זריפה"],
        ["פירות וירקות", "פיצוחים", "גרעינים *חדש*", "גרעינים *חדש*"],
    ),
    rule(
        &["חומוס קלוי"],
        ["פירות וירקות", "פיצוחים", "חומוס ודגנים קלויים *חדש*", "חומוס קלוי *חדש*"],
    ),
    rule(
        &["תירס מטוגן", "תירס"],
        ["פירות וירקות", "פיצוחים", "חטיפי פיצוחים *חדש*", "חטיפי תירס *חדש*"],
    ),
    rule(
        &["קבוקים", "קרנצוס", "רביולי גריל"],
        ["פירות וירקות", "פיצוחים", "חטיפי פיצוחים *חדש*", "חטיפי פיצוחים *חדש*"],
    ),
    rule(
        &["מעורב", "מארז פיצוחים"],
        ["פירות וירקות", "פיצוחים", "תערובות פיצוחים *חדש*", "תערובות פיצוחים *חדש*"],
    ),
    rule(
        &["ממתק פרי"],
        ["פירות וירקות", "פיצוחים", "ממתקי פיצוחים *חדש*", "ממתקי פיצוחים *חדש*"],
    ),
    // Fresh fish
    rule(
        &[
            "דג טרי", "פילה", "דניס", "לברק", "אמנון", "קרפיון", "סלמון", "טונה טרי", "אינטיאס",
            "ברי", "פרידה", "כוקיה", "מוסר", "בקלה", "פגריה",
        ],
        ["מצוננים", "דגים טריים", "דגים טריים", "דגים שלמים טריים *חדש*"],
    ),
    rule(
        &["דג ארוז", "פילה ארוז", "דג מנוקה"],
        ["מצוננים", "דגים טריים", "דגים טריים ארוזים", "דגים ארוזים *חדש*"],
    ),
    // Meat and poultry
    rule(
        &[
            "אנטריקוט", "סינטה", "פילה בקר", "אסאדו", "שפונדרה", "צלעות בקר", "כתף בקר", "שייטל",
            "לשון",
        ],
        ["מצוננים", "קצביה בקר טרי", "חלקי בשר טרי", "נתחי בקר *חדש*"],
    ),
    rule(
        &["בשר טחון", "קציצות"],
        ["מצוננים", "קצביה בקר טרי", "בשר טרי טחון", "בשר טחון *חדש*"],
    ),
    rule(
        &["בשר ארוז"],
        ["מצוננים", "קצביה בקר טרי", "בשר טרי ארוז", "בשר ארוז *חדש*"],
    ),
    rule(
        &["עוף שלם", "פרגית שלמה"],
        ["מצוננים", "קצביה עופות טריים", "עוף טרי שלם", "עוף שלם *חדש*"],
    ),
    rule(
        &["חזה עוף", "שוק עוף", "כנף עוף", "ירך עוף", "חלקי עוף"],
        ["מצוננים", "קצביה עופות טריים", "חלקי עוף טרי", "חלקי עוף *חדש*"],
    ),
    rule(
        &["הודו", "פרגית הודו", "חזה הודו", "שוק הודו"],
        ["מצוננים", "קצביה עופות טריים", "הודו טרי", "חלקי הודו *חדש*"],
    ),
    rule(
        &["עוף טחון", "הודו טחון"],
        ["מצוננים", "קצביה עופות טריים", "עוף והודו טחון", "עוף טחון *חדש*"],
    ),
    // Textiles
    rule(&["מצעים", "סדין", "ציפית"], ["NF", "טקסטיל", "כלי מיטה", "מצעים"]),
    rule(&["שמיכה", "שמיכות"], ["NF", "טקסטיל", "כלי מיטה", "שמיכות קיץ"]),
    rule(&["כרית", "כריות"], ["NF", "טקסטיל", "כלי מיטה", "כריות"]),
    rule(&["מגבת", "מגבות"], ["NF", "טקסטיל", "מגבות", "מגבות גוף"]),
    rule(&["מפה", "מפות"], ["NF", "טקסטיל", "טקסטיל לבית", "מפות"]),
    rule(&["שטיח"], ["NF", "טקסטיל", "טקסטיל לבית", "שטיחים"]),
    rule(&["גרב", "גרביים"], ["NF", "טקסטיל", "ביגוד", "גרבי גברים"]),
    rule(&["צעיף"], ["NF", "טקסטיל", "אביזרי חורף", "צעיפים"]),
    rule(&["כפפות"], ["NF", "טקסטיל", "אביזרי חורף", "כפפות"]),
    rule(&["מטריה"], ["NF", "טקסטיל", "אביזרי חורף", "מטריות"]),
    // Household / electrical
    rule(
        &["כבל", "תקע", "שקע"],
        ["NF", "מוצרי חשמל", "אביזרי חשמל ותאורה", "תקעים וכבלים"],
    ),
    rule(
        &["נורה", "גוף תאורה"],
        ["NF", "מוצרי חשמל", "אביזרי חשמל ותאורה", "נורות וגופי תאורה"],
    ),
    rule(&["סוללה", "סוללות"], ["NF", "מוצרי חשמל", "אלקטרוניקה", "סוללות"]),
    rule(&["אוזניות"], ["NF", "מוצרי חשמל", "אלקטרוניקה", "אוזניות"]),
    rule(
        &["מטען", "כבל טעינה"],
        ["NF", "מוצרי חשמל", "אלקטרוניקה", "מטענים וכבלים"],
    ),
    rule(
        &["מברשת שיניים", "חוט דנטלי", "מגרד לשון", "קיסם"],
        ["פארם", "היגיינת הפה", "מברשות שיניים", "מברשות שיניים *חדש*"],
    ),
    rule(&["פח", "פחים"], ["NF", "כלי בית", "מוצרים לבית", "פחים"]),
    rule(
        &["מעצור דלת"],
        ["NF", "כלי בית", "מוצרים לבית", "מוצרים לבית *חדש*"],
    ),
    rule(
        &["פרלטור", "ברז", "צינור"],
        ["NF", "כלי בית", "מוצרים לאמבטיה", "ברזים וחסכמים"],
    ),
    rule(&["בלון"], ["NF", "פנאי", "אביזרי מסיבה", "בלונים"]),
    rule(
        &["פנקס", "מחברת"],
        ["NF", "פנאי", "ציוד משרדי", "מחברות בלוקים ומעטפות"],
    ),
    rule(&["מדבקות"], ["NF", "פנאי", "יצירה", "מדבקות"]),
    rule(
        &["צנצנת", "קוצץ ציפורניים"],
        ["NF", "כלי בית", "כלי אחסון", "מוצרי אחסון פלסטיק"],
    ),
    // Dry food / spices
    rule(
        &["בצל מטוגן", "בצל פריך"],
        ["מזון יבש", "מוצרים לבישול ואפיה", "תבלינים", "תבלינים בשקית"],
    ),
    // Beverages
    rule(
        &["מיץ", "נקטר"],
        ["משקאות", "משקאות קלים", "נקטרים ומיצים", "מיצים *חדש*"],
    ),
    // Garden / plants
    rule(
        &["לוונדר", "צמח", "עציץ", "פרח"],
        ["NF", "גינה *חדש*", "צמחים *חדש*", "צמחים וזרעים *חדש*"],
    ),
];
