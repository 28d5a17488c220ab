use conlang_core::alphabet::{Alphabet, Class, Letter};
use conlang_core::collection::Collection;
use conlang_core::generator::WordGenerator;
use conlang_core::morph::Morpheme;

/// Embedded letter definitions: upper form, lower form, classes.
const LETTERS: [&str; 25] = [
    "A,a,V", "E,e,V", "I,i,V", "O,o,V", "U,u,V",
    "B,b,C", "C,c,C", "D,d,C", "F,f,C", "G,g,C",
    "H,h,C", "J,j,C", "K,k,C", "L,l,C", "M,m,C",
    "N,n,C", "P,p,C", "Q,q,C", "R,r,C", "S,s,C",
    "T,t,C", "V,v,C", "W,w,C", "X,x,C", "Z,z,C",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("An example of a simple alphabet...");

    // Malformed definitions are reported and skipped
    let alphabet: Alphabet = LETTERS
        .iter()
        .filter_map(|definition| match definition.parse::<Letter>() {
            Ok(letter) => Some(letter),
            Err(e) => {
                log::warn!("skipping letter: {e}");
                None
            }
        })
        .collect();
    println!("Parsed an alphabet of length {}", alphabet.len());

    // Separate the letters by class
    let consonants = alphabet.letters_by_class(Class('C'));
    let vowels = alphabet.letters_by_class(Class('V'));
    println!("Got {} consonants and {} vowels", consonants.len(), vowels.len());
    println!("Consonants: {}", consonants.joined());
    println!("Vowels: {}", vowels.joined());

    // Pass a seed as first argument for reproducible words
    let mut generator = match std::env::args().nth(1) {
        Some(seed) => WordGenerator::from_seed(&alphabet, seed.parse()?),
        None => WordGenerator::from_os_rng(&alphabet),
    };
    let input = generator.make_generation_input();

    // '#' is not a class of this alphabet and renders as '?'
    let patterns = ["CVC", "CVCV", "VC", "V", "VCV", "#"];
    println!("Generated random words");
    println!("{}", generator.generate_many(&patterns, &input).join(" "));

    println!("Combined morphemes");
    let pairs = [
        (Morpheme::prefix("un"), Morpheme::stem("do")),
        (Morpheme::stem("couch"), Morpheme::stem("pillow")),
        (Morpheme::suffix("ly"), Morpheme::stem("mad")),
        (Morpheme::prefix("un"), Morpheme::prefix("re")),
        (Morpheme::suffix("ly"), Morpheme::prefix("re")),
        (Morpheme::suffix("ly"), Morpheme::suffix("ly")),
    ];
    for (a, b) in &pairs {
        println!("{a:#} + {b:#} => {:#}", a.combine(b));
    }

    Ok(())
}
