//! Built-in fact database.
//!
//! These facts ship with the library so an overlay has something to show
//! before the host registers any of its own. The set is immutable; user
//! facts are merged on top of it per category by the store.

/// Built-in facts, keyed by category.
pub(crate) const BUILTIN: &[(&str, &[&str])] = &[
    (
        "general",
        &[
            "The shortest war in history was between Britain and Zanzibar in 1896. It lasted 38 minutes.",
            "A day on Venus is longer than its year: 243 Earth days to rotate, 225 to orbit the Sun.",
            "The first oranges weren't orange. The originals from Southeast Asia were green.",
            "Honey never spoils. Pots found in ancient Egyptian tombs are still edible after 3,000 years.",
            "A group of flamingos is called a \"flamboyance.\"",
            "The first product scanned with a barcode was a pack of Wrigley's gum, in 1974.",
            "The average person spends six months of their life waiting at red lights.",
            "The shortest complete sentence in English is \"I am.\"",
            "A \"jiffy\" is an actual unit of time: one hundredth of a second.",
            "The first YouTube video, \"Me at the zoo,\" was uploaded on April 23, 2005.",
        ],
    ),
    (
        "science",
        &[
            "The human body contains enough carbon to make about 900 pencils.",
            "A single lightning bolt carries enough energy to toast 100,000 slices of bread.",
            "The average person walks the equivalent of three trips around the world in a lifetime.",
            "The human brain can recognize an image seen for as little as 13 milliseconds.",
            "Bananas are mildly radioactive thanks to their potassium-40 content.",
            "Hot water can freeze faster than cold water, an effect named after Erasto Mpemba.",
            "Octopuses have three hearts, and two of them stop beating when the octopus swims.",
            "Sound travels about four times faster through water than through air.",
        ],
    ),
    (
        "tech",
        &[
            "The first computer programmer was Ada Lovelace, who wrote the first algorithm in the 1840s.",
            "The first computer mouse, built in 1964, was made of wood.",
            "The first website is still online at info.cern.ch, created in 1991.",
            "The first email was sent in 1971 by Ray Tomlinson, to himself.",
            "The first computer bug was a real bug: a moth Grace Hopper found in the Harvard Mark II in 1947.",
            "The first camera phone was released in Japan in 1997.",
            "The first emoji set was designed in 1999 by Shigetaka Kurita.",
        ],
    ),
];
