// src/translations.rs
//
// Phrase tables for the assistant. Patterns are case-insensitive regular
// expressions applied in the listed order; replacements are literal.

use crate::language::LanguageCode;

pub type PhraseRules = &'static [(&'static str, &'static str)];

const SPANISH_RULES: PhraseRules = &[
    ("Hello|Hi", "Hola"),
    ("Thank you|Thanks", "Gracias"),
    ("Here are some suggestions", "Aquí hay algunas sugerencias"),
    ("You can", "Puedes"),
    ("Try", "Intenta"),
    ("Consider", "Considera"),
    ("based on your", "basado en tus"),
    ("purchases", "compras"),
    ("healthy vegetables", "vegetales saludables"),
    ("you could", "podrías"),
    ("easily incorporate", "incorporar fácilmente"),
    ("into your diet", "en tu dieta"),
    ("Leafy Greens", "Verduras de Hoja Verde"),
    ("Spinach", "Espinaca"),
    ("kale", "col rizada"),
    ("can be added to", "se puede añadir a"),
    ("smoothies", "batidos"),
    ("you already buy", "ya compras"),
    ("or used in", "o usado en"),
    ("salads", "ensaladas"),
    ("Broccoli", "Brócoli"),
    ("Cauliflower", "Coliflor"),
    ("Great", "Excelente"),
    ("roasted", "asado"),
    ("steamed", "al vapor"),
    ("as a side dish", "como guarnición"),
    ("Carrots", "Zanahorias"),
    ("Easy to snack on", "Fáciles de comer como aperitivo"),
    ("relatively inexpensive", "relativamente baratas"),
    ("Okay", "Bien"),
];

const FRENCH_RULES: PhraseRules = &[
    ("Hello|Hi", "Bonjour"),
    ("Thank you|Thanks", "Merci"),
    ("Here are some suggestions", "Voici quelques suggestions"),
    ("You can", "Vous pouvez"),
    ("Try", "Essayez"),
    ("Consider", "Considérez"),
    ("based on your", "selon vos"),
    ("purchases", "achats"),
    ("healthy vegetables", "légumes sains"),
    ("you could", "vous pourriez"),
    ("easily incorporate", "facilement incorporer"),
    ("into your diet", "dans votre alimentation"),
    ("Leafy Greens", "Légumes à Feuilles"),
    ("Spinach", "Épinards"),
    ("kale", "chou frisé"),
    ("can be added to", "peuvent être ajoutés à"),
    ("smoothies", "smoothies"),
    ("you already buy", "vous achetez déjà"),
    ("or used in", "ou utilisés dans"),
    ("salads", "salades"),
    ("Broccoli", "Brocoli"),
    ("Cauliflower", "Chou-fleur"),
    ("Great", "Excellent"),
    ("roasted", "rôti"),
    ("steamed", "cuit à la vapeur"),
    ("as a side dish", "comme accompagnement"),
    ("Carrots", "Carottes"),
    ("Easy to snack on", "Faciles à grignoter"),
    ("relatively inexpensive", "relativement peu coûteuses"),
    ("Okay", "D'accord"),
];

const GERMAN_RULES: PhraseRules = &[
    ("Hello|Hi", "Hallo"),
    ("Thank you|Thanks", "Danke"),
    ("Here are some suggestions", "Hier sind einige Vorschläge"),
    ("You can", "Sie können"),
    ("Try", "Versuchen Sie"),
    ("Consider", "Erwägen Sie"),
    ("based on your", "basierend auf Ihren"),
    ("purchases", "Einkäufen"),
    ("healthy vegetables", "gesundes Gemüse"),
    ("you could", "könnten Sie"),
    ("easily incorporate", "leicht integrieren"),
    ("into your diet", "in Ihre Ernährung"),
    ("Leafy Greens", "Blattgemüse"),
    ("Spinach", "Spinat"),
    ("kale", "Grünkohl"),
    ("can be added to", "kann hinzugefügt werden zu"),
    ("smoothies", "Smoothies"),
    ("you already buy", "Sie kaufen bereits"),
    ("or used in", "oder verwendet in"),
    ("salads", "Salaten"),
    ("Broccoli", "Brokkoli"),
    ("Cauliflower", "Blumenkohl"),
    ("Great", "Großartig"),
    ("roasted", "geröstet"),
    ("steamed", "gedämpft"),
    ("as a side dish", "als Beilage"),
    ("Carrots", "Karotten"),
    ("Easy to snack on", "Leicht zu snacken"),
    ("relatively inexpensive", "relativ günstig"),
    ("Okay", "In Ordnung"),
];

const HINDI_RULES: PhraseRules = &[
    ("Hello|Hi", "नमस्ते"),
    ("Thank you|Thanks", "धन्यवाद"),
    ("Here are some suggestions", "यहां कुछ सुझाव हैं"),
    ("You can", "आप कर सकते हैं"),
    ("Try", "प्रयास करें"),
    ("Consider", "विचार करें"),
];

const CHINESE_RULES: PhraseRules = &[
    ("Hello|Hi", "你好"),
    ("Thank you|Thanks", "谢谢"),
    ("Here are some suggestions", "这里有一些建议"),
    ("You can", "您可以"),
    ("Try", "尝试"),
    ("Consider", "考虑"),
];

/// Rules used to translate coaching replies. English has none.
pub fn response_rules(lang: LanguageCode) -> PhraseRules {
    match lang {
        LanguageCode::En => &[],
        LanguageCode::Es => SPANISH_RULES,
        LanguageCode::Fr => FRENCH_RULES,
        LanguageCode::De => GERMAN_RULES,
        LanguageCode::Hi => HINDI_RULES,
        LanguageCode::Zh => CHINESE_RULES,
    }
}

/// Fixed sentences the widget says on its own, outside coaching replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedPhrase {
    Assistance,
    FetchError,
    FollowUp,
}

pub fn canned_phrase(phrase: CannedPhrase, lang: LanguageCode) -> &'static str {
    use CannedPhrase::*;
    use LanguageCode::*;

    match (phrase, lang) {
        (Assistance, En) => "How can I assist you further?",
        (Assistance, Es) => "¿Cómo puedo ayudarte más?",
        (Assistance, Fr) => "Comment puis-je vous aider davantage?",
        (Assistance, Hi) => "मैं आपकी आगे कैसे मदद कर सकता हूँ?",
        (Assistance, De) => "Wie kann ich Ihnen weiterhelfen?",
        (Assistance, Zh) => "我能为您提供什么帮助？",

        (FetchError, En) => "Sorry, I couldn't fetch a response.",
        (FetchError, Es) => "Lo siento, no pude obtener una respuesta.",
        (FetchError, Fr) => "Désolé, je n'ai pas pu obtenir de réponse.",
        (FetchError, Hi) => "क्षमा करें, मैं प्रतिक्रिया प्राप्त नहीं कर सका।",
        (FetchError, De) => "Entschuldigung, ich konnte keine Antwort abrufen.",
        (FetchError, Zh) => "抱歉，我无法获取回复。",

        (FollowUp, En) => "What else would you like to know?",
        (FollowUp, Es) => "¿Qué más te gustaría saber?",
        (FollowUp, Fr) => "Que souhaitez-vous savoir d'autre?",
        (FollowUp, Hi) => "आप और क्या जानना चाहेंगे?",
        (FollowUp, De) => "Was möchten Sie sonst noch wissen?",
        (FollowUp, Zh) => "您还想了解什么？",
    }
}
