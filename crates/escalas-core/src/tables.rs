//! Static questionnaire content.
//!
//! Item texts, option labels and instructions exactly as administered
//! (Spanish). Nothing here is computed; `instrument.rs` assembles these
//! tables into definitions.

// =============================================================================
// BAI - Beck Anxiety Inventory (21 items, 0..=3)
// =============================================================================

pub(crate) const BAI_TITLE: &str = "Inventario de Ansiedad de Beck (BAI)";

pub(crate) const BAI_INSTRUCTIONS: &str = "INSTRUCCIONES:\n\
Lea cada síntoma y marque cuánto le ha afectado actualmente. Considere como \
referencia las dificultades que ha tenido este último mes.";

pub(crate) const BAI_ITEMS: [&str; 21] = [
    "Hormigueo o entumecimiento",
    "Sensación de calor",
    "Con temblor en las piernas",
    "Incapacidad de relajarse",
    "Miedo a que suceda lo peor",
    "Mareo o aturdimiento",
    "Latidos del corazón fuertes y acelerados",
    "Sensación de inestabilidad e inseguridad física",
    "Atemorizado o asustado",
    "Nerviosismo",
    "Sensación de bloqueo o ahogo",
    "Temblores en las manos",
    "Inquieto, inseguro o estremecimiento",
    "Miedo a perder el control",
    "Dificultad para respirar",
    "Miedo a morirse",
    "Sobresaltos",
    "Con problemas digestivos o abdominales",
    "Palidez",
    "Rubor facial",
    "Con sudores, fríos o calientes (no debidos a la temperatura)",
];

pub(crate) const BAI_OPTIONS: [(&str, u8); 4] =
    [("Nada", 0), ("Leve", 1), ("Moderado", 2), ("Bastante", 3)];

// =============================================================================
// PSS - Perceived Stress Scale (14 items, 0..=4)
// =============================================================================

pub(crate) const PSS_TITLE: &str = "Escala de Estrés Percibido (PSS)";

pub(crate) const PSS_INSTRUCTIONS: &str = "INSTRUCCIONES:\n\
Las preguntas en esta escala hacen referencia a tus sentimientos y pensamientos \
durante el último mes. En cada caso, por favor indica la expresión que mejor \
represente como te has sentido o cómo has enfrentado cada situación.";

pub(crate) const PSS_ITEMS: [&str; 14] = [
    "En el último mes, ¿con qué frecuencia te has sentido afectado por algo que ocurrió inesperadamente?",
    "En el último mes, ¿con qué frecuencia te has sentido incapaz de controlar las cosas importantes en tu vida?",
    "En el último mes, ¿con qué frecuencia te has sentido nervioso o estresado?",
    "En el último mes, ¿con qué frecuencia has manejado con éxito los pequeños problemas irritantes de la vida?",
    "En el último mes, ¿con qué frecuencia has sentido que has afrontado efectivamente los cambios importantes que han estado ocurriendo en tu vida?",
    "En el último mes, ¿con qué frecuencia has estado seguro sobre tu capacidad para manejar tus problemas personales?",
    "En el último mes, ¿con qué frecuencia has sentido que las cosas van bien?",
    "En el último mes, ¿con qué frecuencia has sentido que no podías afrontar todas las cosas que tenías que hacer?",
    "En el último mes, ¿con qué frecuencia has podido controlar las dificultades de tu vida?",
    "En el último mes, ¿con qué frecuencia has sentido que tenías todo bajo control?",
    "En el último mes, ¿con qué frecuencia has estado enfadado porque las cosas que te han ocurrido estaban fuera de tu control?",
    "En el último mes, ¿con qué frecuencia has pensado sobre las cosas que te faltan por hacer?",
    "En el último mes, ¿con qué frecuencia has podido controlar la forma de pasar el tiempo?",
    "En el último mes, ¿con qué frecuencia has sentido que las dificultades se acumulan tanto que no puedes superarlas?",
];

/// 1-based positions of the reverse-scored PSS items.
pub const PSS_REVERSED: [usize; 7] = [4, 5, 6, 7, 9, 10, 13];

pub(crate) const PSS_OPTIONS: [(&str, u8); 5] = [
    ("Nunca", 0),
    ("Casi nunca", 1),
    ("De vez en cuando", 2),
    ("A menudo", 3),
    ("Muy a menudo", 4),
];

pub(crate) const PSS_TOTAL_INSTRUMENT: &str = "PSS_TOTAL";
pub(crate) const PSS_TOTAL_CODE: &str = "sum";
pub(crate) const PSS_TOTAL_TEXT: &str = "Suma de 14 ítems (con inversión)";

// =============================================================================
// PANAS - Positive and Negative Affect Schedule (20 adjectives, 1..=5)
// =============================================================================

pub(crate) const PANAS_TITLE: &str =
    "Escala de Afectividad Positiva y Negativa (PANAS) (versión corta en castellano)";

pub(crate) const PANAS_INSTRUCTIONS: &str = "INSTRUCCIONES:\n\
Esta escala consiste en una serie de palabras que describen diferentes \
sentimientos y emociones. Lea cada palabra y marque la respuesta apropiada \
para usted.\nIndique cómo se siente generalmente.";

/// First ten adjectives are positive affect, last ten negative affect.
pub(crate) const PANAS_ITEMS: [&str; 20] = [
    "interesado/a",
    "entusiasmado/a",
    "fuerte",
    "inspirado/a",
    "alerta",
    "activo/a",
    "atento/a",
    "decidido/a",
    "orgulloso/a",
    "emocionado/a",
    "irritable",
    "nervioso/a",
    "culpable",
    "temeroso/a",
    "ansioso/a",
    "inquieto/a",
    "avergonzado/a",
    "triste",
    "hostil",
    "asustado/a",
];

pub(crate) const PANAS_OPTIONS: [(&str, u8); 5] = [
    ("1 Muy poco o nada", 1),
    ("2 Algo", 2),
    ("3 Moderadamente", 3),
    ("4 Bastante", 4),
    ("5 Extremadamente", 5),
];

// =============================================================================
// SAM MANIKIN - valence, activation, dominance (1..=9)
// =============================================================================

pub(crate) const MANIKIN_TITLE: &str =
    "Maniquí de autoevaluación (Valencia, Activación, Dominio)";

pub(crate) const MANIKIN_INSTRUCTIONS: &str = "INSTRUCCIONES:\n\
Observa la tira de maniquíes y elige un número del 1 al 9 que mejor describa \
cómo te sientes.\nSi tiene dudas pregunte al entrevistador.";

/// (log name, on-screen label, scale image, score inverted)
pub(crate) const MANIKIN_DIMENSIONS: [(&str, &str, &str, bool); 3] = [
    (
        "Valencia",
        "Valencia (muy desagradable → muy agradable)",
        "valence_scale.png",
        false,
    ),
    (
        "Activación",
        "Activación (muy activado → muy calmado)",
        "arousal_scale.png",
        true,
    ),
    (
        "Dominio",
        "Dominio (sin control → con mucho control)",
        "dominance_scale.png",
        false,
    ),
];

pub(crate) const MANIKIN_OPTIONS: [(&str, u8); 9] = [
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
];

// =============================================================================
// SAM STRESS - Stress Appraisal Measure, 10-item subset (0..=4)
// =============================================================================

pub(crate) const STRESS_TITLE: &str = "Medida de evaluación del estrés (SAM) – Subconjunto";

pub(crate) const STRESS_INSTRUCTIONS: &str = "INSTRUCCIONES:\n\
Este cuestionario se refiere a tus pensamientos sobre la situación identificada \
previamente. No hay respuestas correctas o incorrectas.\n\
Por favor, responde según como te sentiste con la situación.";

/// The full 28-question bank, indexed 1..=28 by position + 1.
pub const STRESS_BANK: [&str; 28] = [
    "¿Es esta una situación totalmente desesperada?",
    "¿Esta situación te crea tensión?",
    "¿El resultado de esta situación es incontrolable por alguien más?",
    "¿Hay alguien o alguna agencia a la que puedas recurrir para pedir ayuda si la necesitas?",
    "¿La situación te hizo sentir ansioso?",
    "¿Esta situación tiene consecuencias importantes para ti?",
    "¿Esta situación va a tener un impacto positivo en ti?",
    "¿Qué tan ansioso estabas por abordar el evento?",
    "¿Cuánto te afectará el resultado de esta situación?",
    "¿Hasta qué punto puedes convertirte en una persona más fuerte debido a este problema?",
    "¿El resultado de esta situación será negativo?",
    "¿Tienes la capacidad de hacerlo bien en esta situación?",
    "¿Esta situación tiene implicaciones serias para ti?",
    "¿Tuviste lo necesario para hacerlo bien en esa situación?",
    "¿Hubo ayuda disponible para mí para lidiar con este problema?",
    "¿La situación superó o agotó mis recursos de afrontamiento?",
    "¿Hubo suficientes recursos disponibles para ayudarme a lidiar con esta situación?",
    "¿Estaba fuera del poder de alguien hacer algo sobre esta situación?",
    "¿Qué tan emocionado estuviste pensando en el resultado de esta situación?",
    "¿Qué tan amenazante fue la situación?",
    "¿El problema fue irresoluble por alguien?",
    "¿Pude superar el problema?",
    "¿Hubo alguien que pudiera ayudarme a manejar este problema?",
    "¿En qué medida percibí esta situación como estresante?",
    "¿Tuve las habilidades necesarias para lograr un resultado exitoso en esta situación?",
    "¿En qué medida este evento requirió esfuerzos de afrontamiento de mi parte?",
    "¿Esta situación tuvo consecuencias a largo plazo para mí?",
    "¿Esto iba a tener un impacto negativo en mí?",
];

/// Bank indices (1-based) administered in the subset, in presentation order.
pub const STRESS_SUBSET: [usize; 10] = [2, 8, 14, 20, 16, 5, 22, 19, 24, 26];

pub(crate) const STRESS_OPTIONS: [(&str, u8); 5] = [
    ("0 Nada", 0),
    ("1 Poco", 1),
    ("2 Algo", 2),
    ("3 Mucho", 3),
    ("4 Demasiado", 4),
];

// =============================================================================
// VALIDATION AND TRANSITION MESSAGES
// =============================================================================

pub(crate) const MSG_ANSWER_ALL: &str = "Responde todas las preguntas.";
pub(crate) const MSG_ANSWER_DIMENSIONS: &str = "Responde las tres dimensiones.";
pub(crate) const MSG_ANSWER_ITEMS: &str = "Responde todos los ítems.";
