//! Fixed stop-word lists

use std::collections::HashSet;
use std::sync::OnceLock;

static SPANISH: OnceLock<HashSet<&'static str>> = OnceLock::new();
static ENGLISH: OnceLock<HashSet<&'static str>> = OnceLock::new();

pub(super) fn spanish() -> &'static HashSet<&'static str> {
    SPANISH.get_or_init(|| {
        [
            "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un",
            "para", "con", "no", "una", "su", "al", "lo", "como", "más", "mas", "pero", "sus",
            "le", "ya", "o", "este", "sí", "si", "porque", "esta", "entre", "cuando", "muy",
            "sin", "sobre", "también", "me", "hasta", "hay", "donde", "quien", "desde", "todo",
            "nos", "durante", "todos", "uno", "les", "ni", "contra", "otros", "ese", "eso",
            "ante", "ellos", "e", "esto", "mí", "antes", "algunos", "qué", "unos", "yo", "otro",
            "otras", "otra", "él", "tanto", "esa", "estos", "mucho", "quienes", "nada",
            "muchos", "cual", "poco", "ella", "estar", "estas", "algunas", "algo", "nosotros",
            "mi", "mis", "tú", "te", "ti", "tu", "tus", "ellas", "nosotras", "vosotros",
            "vosotras", "os", "mío", "mía", "míos", "mías", "tuyo", "tuya", "tuyos", "tuyas",
            "suyo", "suya", "suyos", "suyas", "nuestro", "nuestra", "nuestros", "nuestras",
            "vuestro", "vuestra", "vuestros", "vuestras", "esos", "esas", "estoy", "estás",
            "está", "estamos", "estáis", "están", "esté", "estés", "estemos", "estéis", "estén",
            "estaré", "estarás", "estará", "estaremos", "estaréis", "estarán", "estaba",
            "estabas", "estábamos", "estabais", "estaban", "estuve", "estuviste", "estuvo",
            "estuvimos", "estuvisteis", "estuvieron", "he", "has", "ha", "hemos", "habéis",
            "han", "haya", "hayas", "hayamos", "hayáis", "hayan", "habré", "habrás", "habrá",
            "habremos", "habréis", "habrán", "había", "habías", "habíamos", "habíais",
            "habían", "hube", "hubiste", "hubo", "hubimos", "hubisteis", "hubieron", "soy",
            "eres", "es", "somos", "sois", "son", "sea", "seas", "seamos", "seáis", "sean",
            "seré", "serás", "será", "seremos", "seréis", "serán", "era", "eras", "éramos",
            "erais", "eran", "fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron", "tengo",
            "tienes", "tiene", "tenemos", "tenéis", "tienen", "tenga", "tengas", "tengamos",
            "tengáis", "tengan", "tendré", "tendrás", "tendrá", "tendremos", "tendréis",
            "tendrán", "tenía", "tenías", "teníamos", "teníais", "tenían", "tuve", "tuviste",
            "tuvo", "tuvimos", "tuvisteis", "tuvieron", "ser", "haber", "tener", "cada",
            "aunque", "entonces", "así", "aquí", "allí", "luego", "mientras", "después",
        ]
        .iter()
        .copied()
        .collect()
    })
}

pub(super) fn english() -> &'static HashSet<&'static str> {
    ENGLISH.get_or_init(|| {
        [
            "a", "about", "above", "after", "again", "against", "all", "also", "am", "an",
            "and", "any", "are", "as", "at", "be", "because", "been", "before", "being",
            "below", "between", "both", "but", "by", "can", "cannot", "could", "did", "do",
            "does", "doing", "down", "during", "each", "either", "else", "ever", "every",
            "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
            "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if",
            "in", "into", "is", "it", "its", "itself", "just", "least", "less", "many", "may",
            "me", "might", "more", "most", "much", "must", "my", "myself", "neither", "never",
            "no", "nor", "not", "now", "of", "off", "often", "on", "once", "only", "or",
            "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
            "per", "perhaps", "rather", "same", "she", "should", "since", "so", "some", "such",
            "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
            "these", "they", "this", "those", "though", "through", "thus", "to", "too",
            "under", "until", "up", "upon", "us", "very", "was", "we", "well", "were", "what",
            "whatever", "when", "where", "whether", "which", "while", "who", "whom", "whose",
            "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours",
            "yourself", "yourselves",
        ]
        .iter()
        .copied()
        .collect()
    })
}
