use rs_novel_core::model::generator::Generator;
use rs_novel_core::model::novelizer::Novelizer;
use rs_novel_core::model::store::TripletStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    // Corpus files are resolved under the asset root; inline text takes
    // precedence over the file when both are given.
    let mut novelizer = Novelizer::new("./asset");
    novelizer.register(
        "title.txt",
        Some("I am a cat. I am a dog. I am happy. A cat is happy. A dog is a friend."),
    )?;

    // Materialize the model; 'true' resets the store for a fresh build,
    // 'false' would append duplicate rows instead.
    let store = TripletStore::new("./db/model.bin");
    novelizer.save(&store, true)?;

    // Dump part of the triplet listing (prefix1|prefix2|suffix freq)
    for line in novelizer.inspect()?.iter().take(10) {
        println!("{line}");
    }

    // Generate 10 sentences by weighted Markov walk over the store
    let generator = Generator::new(store);
    for (i, sentence) in generator.generate(10)?.iter().enumerate() {
        println!("Generated sentence {}: {}", i + 1, sentence);
    }

    Ok(())
}
