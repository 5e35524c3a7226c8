// src/quizgen/fallback.rs
//
// Deterministic question banks used whenever the generative backend is
// unavailable or returns something unusable. These guarantee that quiz
// generation never fails, with or without AI credentials.

use crate::models::quiz::{Level, QuizQuestion};

/// Topic detected from the study text, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Plants,
    Animals,
    Mathematics,
    Language,
    General,
}

/// Case-insensitive keyword routing over the extracted text.
/// Priority: plants, then animals, then mathematics, then language.
pub fn detect_topic(text: &str) -> Topic {
    let lower = text.to_lowercase();
    if lower.contains("plant") {
        Topic::Plants
    } else if lower.contains("animal") {
        Topic::Animals
    } else if lower.contains("math") {
        Topic::Mathematics
    } else if lower.contains("language") {
        Topic::Language
    } else {
        Topic::General
    }
}

/// Returns the fixed 5-question set for the text's topic at the level's
/// bank tier. Never fails and never returns an empty list.
pub fn fallback_questions(text: &str, level: Level) -> Vec<QuizQuestion> {
    let topic = detect_topic(text);
    let tier = level.bank_tier();
    tracing::info!(?topic, tier, "using fallback question bank");

    match topic {
        Topic::Plants => plant_questions(tier),
        Topic::Animals => animal_questions(tier),
        Topic::Mathematics => math_questions(tier),
        Topic::Language => language_questions(tier),
        Topic::General => general_questions(tier),
    }
}

fn q(question: &str, options: [&str; 4], correct: usize, explanation: &str) -> QuizQuestion {
    QuizQuestion {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer_index: correct,
        explanation: Some(explanation.to_string()),
    }
}

fn plant_questions(tier: usize) -> Vec<QuizQuestion> {
    if tier == 0 {
        vec![
            q(
                "What do plants need to grow?",
                ["Sunlight and water", "Ice cream", "Television", "Bicycles"],
                0,
                "Plants need sunlight and water to grow healthy.",
            ),
            q(
                "Which part of the plant is usually green?",
                ["Roots", "Leaves", "Flowers", "Fruits"],
                1,
                "Leaves are usually green because they contain chlorophyll for photosynthesis.",
            ),
            q(
                "Where do plants get water from?",
                ["From the soil", "From the air", "From other plants", "From animals"],
                0,
                "Plants absorb water from the soil through their roots.",
            ),
            q(
                "What do the roots of a plant do?",
                ["Make food", "Hold the plant in the soil", "Make flowers", "Make fruit"],
                1,
                "Roots hold the plant firmly in the soil and absorb water and nutrients.",
            ),
            q(
                "What is the colorful part of many plants that bees visit?",
                ["Stem", "Leaf", "Flower", "Root"],
                2,
                "Flowers are often colorful to attract bees and other pollinators.",
            ),
        ]
    } else {
        vec![
            q(
                "What process do plants use to make their own food?",
                ["Digestion", "Photosynthesis", "Respiration", "Transpiration"],
                1,
                "Plants use photosynthesis to make food using sunlight, water, and carbon dioxide.",
            ),
            q(
                "Which part of the plant carries water from the roots to the leaves?",
                ["Flowers", "Fruits", "Stems", "Seeds"],
                2,
                "Stems carry water and nutrients from the roots to other parts of the plant.",
            ),
            q(
                "What do we call it when a seed starts to grow?",
                ["Germination", "Photosynthesis", "Pollination", "Respiration"],
                0,
                "Germination is when a seed begins to grow and develop into a seedling.",
            ),
            q(
                "What gas do plants take in from the air to make food?",
                ["Oxygen", "Carbon dioxide", "Nitrogen", "Hydrogen"],
                1,
                "Plants take in carbon dioxide from the air during photosynthesis.",
            ),
            q(
                "What do plants produce that humans and animals breathe in?",
                ["Carbon dioxide", "Nitrogen", "Oxygen", "Hydrogen"],
                2,
                "Plants release oxygen during photosynthesis, which humans and animals breathe.",
            ),
        ]
    }
}

fn animal_questions(tier: usize) -> Vec<QuizQuestion> {
    if tier == 0 {
        vec![
            q(
                "Which animal has a very long neck?",
                ["Elephant", "Giraffe", "Tiger", "Crocodile"],
                1,
                "Giraffes have very long necks that help them eat leaves from tall trees.",
            ),
            q(
                "What do birds use to fly?",
                ["Legs", "Tails", "Wings", "Paws"],
                2,
                "Birds use their wings to fly.",
            ),
            q(
                "Which animal swims in the ocean?",
                ["Lion", "Elephant", "Fish", "Snake"],
                2,
                "Fish live in water and can swim in oceans, rivers, and lakes.",
            ),
            q(
                "Which animal has a shell?",
                ["Dog", "Turtle", "Bird", "Monkey"],
                1,
                "Turtles have shells that protect their bodies.",
            ),
            q(
                "What do most animals need to stay alive?",
                ["Food and water", "Cars", "Television", "Computers"],
                0,
                "Animals need food and water to survive, just like humans.",
            ),
        ]
    } else {
        vec![
            q(
                "Which group of animals have scales?",
                ["Mammals", "Birds", "Reptiles", "Amphibians"],
                2,
                "Reptiles like snakes, lizards, and crocodiles have scales on their skin.",
            ),
            q(
                "What do we call animals that only eat plants?",
                ["Carnivores", "Herbivores", "Omnivores", "Insectivores"],
                1,
                "Herbivores are animals that only eat plants.",
            ),
            q(
                "Which animal is a marsupial?",
                ["Elephant", "Kangaroo", "Tiger", "Dolphin"],
                1,
                "Kangaroos are marsupials, which carry their babies in pouches.",
            ),
            q(
                "What special ability do bats have?",
                [
                    "They can see through walls",
                    "They can fly",
                    "They can breathe underwater",
                    "They can change colors",
                ],
                1,
                "Bats are mammals that can fly using their wings.",
            ),
            q(
                "What are baby frogs called?",
                ["Kittens", "Calves", "Tadpoles", "Larvae"],
                2,
                "Baby frogs are called tadpoles and live in water before they grow legs.",
            ),
        ]
    }
}

fn math_questions(tier: usize) -> Vec<QuizQuestion> {
    if tier == 0 {
        vec![
            q("What is 3 + 2?", ["4", "5", "6", "7"], 1, "3 + 2 = 5"),
            q(
                "Count the objects: 🍎🍎🍎. How many apples are there?",
                ["2", "3", "4", "5"],
                1,
                "There are 3 apple emojis in the picture.",
            ),
            q(
                "Which number comes after 7?",
                ["6", "7", "8", "9"],
                2,
                "The number 8 comes after 7 when counting.",
            ),
            q(
                "What shape is this: ⭐?",
                ["Circle", "Square", "Triangle", "Star"],
                3,
                "The shape is a star.",
            ),
            q(
                "If you have 2 candies and get 3 more, how many do you have?",
                ["4", "5", "6", "7"],
                1,
                "2 candies + 3 more candies = 5 candies in total.",
            ),
        ]
    } else {
        vec![
            q("What is 5 + 7?", ["10", "11", "12", "13"], 2, "5 + 7 = 12"),
            q(
                "If you have 10 marbles and give away 4, how many do you have left?",
                ["4", "5", "6", "7"],
                2,
                "10 marbles - 4 marbles = 6 marbles remaining.",
            ),
            q(
                "Which number is greater than 15?",
                ["12", "13", "14", "16"],
                3,
                "16 is greater than 15.",
            ),
            q(
                "How many sides does a triangle have?",
                ["2", "3", "4", "5"],
                1,
                "A triangle has 3 sides.",
            ),
            q("What is 8 - 3?", ["3", "4", "5", "6"], 2, "8 - 3 = 5"),
        ]
    }
}

fn language_questions(tier: usize) -> Vec<QuizQuestion> {
    if tier == 0 {
        vec![
            q(
                "Which word starts with the letter 'A'?",
                ["Dog", "Cat", "Ball", "Apple"],
                3,
                "Apple starts with the letter 'A'.",
            ),
            q(
                "How many letters are in the word 'cat'?",
                ["2", "3", "4", "5"],
                1,
                "The word 'cat' has 3 letters: c, a, and t.",
            ),
            q(
                "Which is a color?",
                ["Dog", "Book", "Blue", "Table"],
                2,
                "Blue is a color.",
            ),
            q(
                "Which animal says 'meow'?",
                ["Dog", "Cat", "Fish", "Bird"],
                1,
                "Cats make the sound 'meow'.",
            ),
            q(
                "Which word means the opposite of 'big'?",
                ["Huge", "Large", "Small", "Tall"],
                2,
                "Small is the opposite of big.",
            ),
        ]
    } else {
        vec![
            q(
                "What is a group of words that makes a complete thought?",
                ["Word", "Letter", "Sentence", "Paragraph"],
                2,
                "A sentence is a group of words that makes a complete thought.",
            ),
            q(
                "Which punctuation mark ends a question?",
                [
                    "Period (.)",
                    "Question mark (?)",
                    "Comma (,)",
                    "Exclamation point (!)",
                ],
                1,
                "A question mark (?) is used at the end of a question.",
            ),
            q(
                "What is the past tense of 'walk'?",
                ["Walking", "Walked", "Walks", "Will walk"],
                1,
                "The past tense of 'walk' is 'walked'.",
            ),
            q(
                "Which word is a noun?",
                ["Run", "Jump", "Happy", "Book"],
                3,
                "Book is a noun, which is a person, place, or thing.",
            ),
            q(
                "What is a word that describes a noun?",
                ["Adjective", "Verb", "Pronoun", "Adverb"],
                0,
                "An adjective is a word that describes a noun.",
            ),
        ]
    }
}

fn general_questions(tier: usize) -> Vec<QuizQuestion> {
    if tier == 0 {
        vec![
            q(
                "Which of these is a fruit?",
                ["Carrot", "Potato", "Apple", "Broccoli"],
                2,
                "An apple is a fruit.",
            ),
            q(
                "What do we use to write?",
                ["Pencil", "Fork", "Plate", "Chair"],
                0,
                "We use a pencil to write.",
            ),
            q(
                "Which animal can fly?",
                ["Fish", "Dog", "Bird", "Cat"],
                2,
                "Birds can fly using their wings.",
            ),
            q(
                "What do we drink when we are thirsty?",
                ["Sand", "Water", "Rocks", "Soil"],
                1,
                "We drink water when we are thirsty.",
            ),
            q(
                "What shape is a ball?",
                ["Square", "Triangle", "Circle", "Rectangle"],
                2,
                "A ball is a sphere, which is a 3D circle.",
            ),
        ]
    } else {
        vec![
            q(
                "What is the capital city of Malaysia?",
                ["Penang", "Johor Bahru", "Kuala Lumpur", "Ipoh"],
                2,
                "Kuala Lumpur is the capital city of Malaysia.",
            ),
            q(
                "Which of these is not a season?",
                ["Summer", "Winter", "Autumn", "Malaysia"],
                3,
                "Malaysia is a country, not a season. The seasons are summer, winter, autumn, and spring.",
            ),
            q(
                "Which sense do we use with our eyes?",
                ["Hearing", "Smell", "Sight", "Taste"],
                2,
                "We use our eyes for the sense of sight.",
            ),
            q(
                "What is needed to make a rainbow appear in the sky?",
                [
                    "Sun and rain",
                    "Moon and stars",
                    "Snow and wind",
                    "Clouds and lightning",
                ],
                0,
                "A rainbow appears when there is both sun and rain.",
            ),
            q(
                "What do plants produce that helps fruits grow?",
                ["Leaves", "Flowers", "Branches", "Roots"],
                1,
                "Flowers eventually develop into fruits on many plants.",
            ),
        ]
    }
}
