use mp_core::{Article, ArticleId};

/// The article set published by the municipality, in editorial order.
pub fn municipal_articles() -> Vec<Article> {
    vec![
        Article {
            id: ArticleId::Number(1),
            title: "Nuevo Programa de Pavimentación Mejora Calles en Cholchol".to_string(),
            summary: "La municipalidad ha iniciado un ambicioso programa para mejorar la \
                      infraestructura vial de diversas calles, beneficiando a cientos de vecinos."
                .to_string(),
            content: Some(
                "<p>La Municipalidad de Cholchol ha dado inicio a un proyecto de mejoramiento \
                 vial sin precedentes que transformará significativamente la infraestructura \
                 urbana de nuestra comuna.</p>\n\
                 <p>El programa, que cuenta con una inversión de más de 500 millones de pesos, \
                 contempla la pavimentación de 15 calles que hasta ahora permanecían con \
                 superficies de tierra o ripio, mejorando sustancialmente la calidad de vida de \
                 más de 2.000 habitantes.</p>\n\
                 <p>Los trabajos incluyen también señalética, iluminación LED y la construcción \
                 de veredas accesibles, con un plazo máximo de obra de 8 meses.</p>"
                    .to_string(),
            ),
            image_url: Some("/assets/images/news/calles-cholchol.jpg".to_string()),
            date: "05 de Mayo, 2025".to_string(),
            category: Some("Infraestructura".to_string()),
            link: "/noticias/1".to_string(),
            author: Some("Departamento de Comunicaciones".to_string()),
            read_time: Some("4 min".to_string()),
        },
        Article {
            id: ArticleId::Number(2),
            title: "Exitosa Jornada de Vacunación Contra la Influenza en el CESFAM".to_string(),
            summary: "Más de 500 personas acudieron al Centro de Salud Familiar para recibir la \
                      vacuna contra la influenza en una jornada especial organizada por el \
                      municipio."
                .to_string(),
            content: Some(
                "<p>El Centro de Salud Familiar (CESFAM) de Cholchol vivió una concurrida \
                 jornada durante el pasado fin de semana, cuando más de 500 vecinos de todas \
                 las edades asistieron a la campaña especial de vacunación contra la influenza \
                 estacional.</p>\n\
                 <p>El operativo contó con la participación de 15 profesionales de la salud que \
                 trabajaron en turnos para atender la alta demanda, junto con controles \
                 preventivos y material educativo sobre prevención de enfermedades \
                 respiratorias.</p>"
                    .to_string(),
            ),
            image_url: Some("/assets/images/news/vacunacion-cholchol.jpg".to_string()),
            date: "02 de Mayo, 2025".to_string(),
            category: Some("Salud".to_string()),
            link: "/noticias/2".to_string(),
            author: Some("Equipo de Comunicaciones CESFAM".to_string()),
            read_time: Some("3 min".to_string()),
        },
        Article {
            id: ArticleId::Number(3),
            title: "Abiertas las Inscripciones para Talleres Culturales Gratuitos".to_string(),
            summary: "La Casa de la Cultura invita a niños, jóvenes y adultos a inscribirse en \
                      los nuevos talleres de música, danza y artes plásticas para este semestre."
                .to_string(),
            content: Some(
                "<p>La Municipalidad de Cholchol, a través de su Departamento de Cultura, ha \
                 abierto el período de inscripciones para una amplia gama de talleres \
                 artísticos gratuitos que se desarrollarán durante el segundo semestre.</p>\n\
                 <p>Entre las disciplinas disponibles se encuentran guitarra, violín, piano, \
                 danza folclórica, teatro, pintura, cerámica y literatura, dirigidas a personas \
                 desde los 5 años y sin experiencia previa.</p>\n\
                 <p>Las plazas son limitadas y se asignarán por orden de inscripción en la Casa \
                 de la Cultura, calle Principal 123.</p>"
                    .to_string(),
            ),
            image_url: Some("/assets/images/news/talleres-cholchol.jpg".to_string()),
            date: "28 de Abril, 2025".to_string(),
            category: Some("Cultura".to_string()),
            link: "/noticias/3".to_string(),
            author: Some("Departamento de Cultura".to_string()),
            read_time: Some("3 min".to_string()),
        },
        Article {
            id: ArticleId::Number(4),
            title: "Municipio Lanza Plan de Reciclaje en Barrios Residenciales".to_string(),
            summary: "Con el objetivo de fomentar la sustentabilidad, se implementará un nuevo \
                      sistema de recolección de residuos diferenciados en diversos sectores de \
                      la comuna."
                .to_string(),
            content: Some(
                "<p>En un importante paso hacia la sustentabilidad ambiental, la Municipalidad \
                 de Cholchol ha presentado su nuevo Plan Integral de Reciclaje Comunitario, \
                 iniciativa que revolucionará la gestión de residuos en los barrios \
                 residenciales de la comuna.</p>\n\
                 <p>El programa contempla la instalación de 50 nuevos puntos limpios, la \
                 entrega de contenedores diferenciados para cada vivienda y un calendario \
                 especial de recolección de materiales reciclables.</p>\n\
                 <p>Se estima que el sistema permitirá reducir en aproximadamente un 40% la \
                 cantidad de residuos destinados al vertedero municipal.</p>"
                    .to_string(),
            ),
            image_url: Some("/assets/images/news/reciclaje-cholchol.jpeg".to_string()),
            date: "25 de Abril, 2025".to_string(),
            category: Some("Medio Ambiente".to_string()),
            link: "/noticias/4".to_string(),
            author: Some("Oficina de Medio Ambiente".to_string()),
            read_time: Some("5 min".to_string()),
        },
    ]
}
