use string_rail::prelude::*;

fn main() -> Result<(), ValidationError> {
    println!("=== Greetings ===");
    println!("hello:      {}", hello("Relia", Some("Bonjour"), None)?);
    println!("welcome:    {}", welcome("Développeur", None)?);

    let english = GreetingConfig::new().with_locale("en-US");
    println!("welcome en: {}", welcome("Developer", Some(&english))?);

    println!();
    println!("=== Text transforms ===");
    println!("capitalize: {}", capitalize("hello world", None)?);
    println!("slugify:    {}", slugify("Hello World! Comment ça va?", None)?);
    println!("truncate:   {}", truncate("Ceci est un texte très long qui sera tronqué", Some(30), None)?);

    println!();
    println!("=== Rejected input ===");
    let rejected: [(&str, TextResult); 3] = [
        ("non-text name", hello(123, None, None)),
        ("blank name", hello("   ", None, None)),
        ("markup in name", hello("John<script>alert(\"xss\")</script>", None, None)),
    ];
    for (label, result) in rejected {
        match result {
            Ok(text) => println!("{label}: unexpectedly accepted {text:?}"),
            Err(err) => println!("{label}: {err:#}"),
        }
    }

    Ok(())
}
