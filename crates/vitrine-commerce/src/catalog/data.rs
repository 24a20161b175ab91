//! The store's authored catalog.

use crate::catalog::{Category, Product, ProductImages, StockStatus};
use crate::ids::ProductId;
use crate::money::Money;

const I17_PRO_MAX: &str = "https://lh3.googleusercontent.com/d/1MhWz_I6HiIuF9hOO06u3nctx_fdAGJYK";
const I17: &str = "https://lh3.googleusercontent.com/d/1ESnvm-3_nl1FD4I7jfGzhrNeOBVbqIZ1";
const I16_PRO_MAX: &str = "https://lh3.googleusercontent.com/d/1yDHKkTUWjZh7vQ2bC-f0XjO7pYzF4CMa";
const I16_PRO: &str = "https://lh3.googleusercontent.com/d/1yDHKkTUWjZh7vQ2bC-f0XjO7pYzF4CMa";
const I16_PLUS: &str = "https://lh3.googleusercontent.com/d/1UEwdqE797C-VDBBfUYHAFGzdF0q72DWj";
const I16: &str = "https://lh3.googleusercontent.com/d/10CLPd_wmI55yeJd3fflZTL01uxUjI1x-";
const I15: &str = "https://images.unsplash.com/photo-1695048133142-1a20484d2569?auto=format&fit=crop&q=80&w=800";
const I14: &str = "https://lh3.googleusercontent.com/d/1wWs_YBvrVoKSRk_BKJUf8lD7Ne75i6G7";
const I13: &str = "https://lh3.googleusercontent.com/d/1uyNK_98zQNJNGVJmxB5sWTV03zxEdYS9";
const REDMI_13C: &str = "https://lh3.googleusercontent.com/d/13XZ9pMHPzok82dxquFS4LO6BMP32eQTd";
const REDMI_14C: &str = "https://lh3.googleusercontent.com/d/1votM_Ai_p2lz5T2ofGfX-QUoWVEdiaKU";
const REDMI_NOTE_14: &str = "https://lh3.googleusercontent.com/d/1KZsWLDQ8aWhYWfMWzfRHt-1t2lu8mSON";
const POCO_X7: &str = "https://lh3.googleusercontent.com/d/10gyO3ZHtCaozc_yEPxdl4T7DMoeWX3sJ";
const POCO_X7_PRO: &str = "https://lh3.googleusercontent.com/d/1kNJdx3jGCSVKqU0YR2IhsVMPV3kvr8VA";

/// Stock photos for models without a real photo. `slug` keeps each
/// product's URLs distinct.
fn retail_placeholder(slug: &str) -> ProductImages {
    ProductImages {
        front: format!(
            "https://images.unsplash.com/photo-1598327105666-5b89351aff97?auto=format&fit=crop&q=80&w=800&sig={}f",
            slug
        ),
        side: format!(
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?auto=format&fit=crop&q=80&w=800&sig={}s",
            slug
        ),
        back: format!(
            "https://images.unsplash.com/photo-1610945265064-0e34e5519bbf?auto=format&fit=crop&q=80&w=800&sig={}b",
            slug
        ),
    }
}

struct Entry {
    name: &'static str,
    category: Category,
    base: f64,
    price: f64,
    colors: &'static [&'static str],
    specs: &'static [&'static str],
    description: &'static str,
    images: ProductImages,
    status: StockStatus,
    quantity: u32,
}

impl From<Entry> for Product {
    fn from(e: Entry) -> Self {
        Product {
            id: ProductId::from_name(e.name),
            name: e.name.to_string(),
            category: e.category,
            base_price: Money::brl(e.base),
            final_price: Money::brl(e.price),
            colors: e.colors.iter().map(|c| c.to_string()).collect(),
            specs: e.specs.iter().map(|s| s.to_string()).collect(),
            description: e.description.to_string(),
            images: e.images,
            stock_status: e.status,
            available_quantity: e.quantity,
        }
    }
}

/// Build the authored product list, in display order.
pub(crate) fn builtin_products() -> Vec<Product> {
    use Category::{Iphone, Xiaomi};
    use StockStatus::{InStock, LastUnits};

    let entries = vec![
        // iPhones
        Entry {
            name: "iPhone 17 Pro Max 256GB",
            category: Iphone,
            base: 9000.0,
            price: 9500.0,
            colors: &["Laranja", "Azul", "Silver"],
            specs: &["256GB", "Chip A19 Pro", "Titânio Aeroespacial", "Câmera Tripla 48MP"],
            description: "A revolução tecnológica no seu bolso. O design exclusivo em titânio laranja é a escolha dos líderes.",
            images: ProductImages::uniform(I17_PRO_MAX),
            status: LastUnits,
            quantity: 2,
        },
        Entry {
            name: "iPhone 17 Pro Max 512GB",
            category: Iphone,
            base: 10400.0,
            price: 10900.0,
            colors: &["Laranja"],
            specs: &["512GB", "Lente Periscópica", "Bateria Pro+", "IA Nativa"],
            description: "Espaço ilimitado para sua criatividade. Capture em ProRES 8K sem se preocupar com memória.",
            images: ProductImages::uniform(I17_PRO_MAX),
            status: InStock,
            quantity: 4,
        },
        Entry {
            name: "iPhone 17 Pro Max 1TB",
            category: Iphone,
            base: 11600.0,
            price: 12100.0,
            colors: &["Laranja"],
            specs: &["1 Terabyte", "Máxima Performance", "Capa Couro Inclusa"],
            description: "O smartphone mais potente já criado. 1TB de armazenamento para quem exige o impossível.",
            images: ProductImages::uniform(I17_PRO_MAX),
            status: LastUnits,
            quantity: 1,
        },
        Entry {
            name: "iPhone 17 Pro 256GB",
            category: Iphone,
            base: 8350.0,
            price: 8850.0,
            colors: &["Laranja", "Azul", "Silver"],
            specs: &["256GB", "Tela ProMotion 120Hz", "Design Ergonômico"],
            description: "Poder Pro em um corpo compacto e elegante. O acabamento em titânio garante durabilidade extrema.",
            images: ProductImages::uniform(I17_PRO_MAX),
            status: InStock,
            quantity: 3,
        },
        Entry {
            name: "iPhone 17 256GB",
            category: Iphone,
            base: 6100.0,
            price: 6600.0,
            colors: &["Azul", "Verde", "Lilás", "Preto", "Branco"],
            specs: &["256GB", "Cores Vibrantes", "Dynamic Island 2.0"],
            description: "Estilo e performance em harmonia. O iPhone 17 é a escolha inteligente para quem quer o novo.",
            images: ProductImages::uniform(I17),
            status: InStock,
            quantity: 5,
        },
        Entry {
            name: "iPhone 16 Pro Max 512GB",
            category: Iphone,
            base: 8500.0,
            price: 9000.0,
            colors: &["Preto"],
            specs: &["512GB", "Apple Intelligence", "Titânio Negro"],
            description: "A geração que mudou a história com IA nativa. Potência absoluta em cada pixel.",
            images: ProductImages::uniform(I16_PRO_MAX),
            status: InStock,
            quantity: 2,
        },
        Entry {
            name: "iPhone 16 Pro 128GB",
            category: Iphone,
            base: 6100.0,
            price: 6600.0,
            colors: &["Branco"],
            specs: &["128GB", "Foco Automático Laser", "Chip A18 Pro"],
            description: "A fotografia profissional elevada ao máximo. O iPhone 16 Pro é a ferramenta do artista moderno.",
            images: ProductImages::uniform(I16_PRO),
            status: InStock,
            quantity: 4,
        },
        Entry {
            name: "iPhone 16 Plus 128GB",
            category: Iphone,
            base: 5100.0,
            price: 5600.0,
            colors: &["Branco", "Preto"],
            specs: &["128GB", "Tela Gigante 6.7\"", "Bateria Imbatível"],
            description: "Imersão total para seus vídeos e jogos. A maior tela pelo melhor custo-benefício.",
            images: ProductImages::uniform(I16_PLUS),
            status: InStock,
            quantity: 3,
        },
        Entry {
            name: "iPhone 16 128GB",
            category: Iphone,
            base: 4700.0,
            price: 5200.0,
            colors: &["Rosé", "Preto", "Verde", "Branco"],
            specs: &["128GB", "Botão de Ação", "Cores Mate"],
            description: "Inovação acessível. O ponto de entrada para a tecnologia mais moderna da Apple.",
            images: ProductImages::uniform(I16),
            status: InStock,
            quantity: 5,
        },
        Entry {
            name: "iPhone 15 128GB",
            category: Iphone,
            base: 4000.0,
            price: 4500.0,
            colors: &["Rosé"],
            specs: &["128GB", "USB-C", "Dynamic Island"],
            description: "Modernidade e praticidade com conexão universal USB-C. Um campeão de vendas na WB.",
            images: ProductImages::uniform(I15),
            status: LastUnits,
            quantity: 1,
        },
        Entry {
            name: "iPhone 14 128GB",
            category: Iphone,
            base: 3500.0,
            price: 4000.0,
            colors: &["Branco", "Preto"],
            specs: &["128GB", "Chip A15 Bionic", "Super Retina XDR", "Cinematográfico 4K"],
            description: "Desempenho duradouro e fotos incríveis. O iPhone 14 é ideal para quem busca tecnologia e estilo.",
            images: ProductImages::uniform(I14),
            status: InStock,
            quantity: 4,
        },
        Entry {
            name: "iPhone 13 128GB",
            category: Iphone,
            base: 3150.0,
            price: 3650.0,
            colors: &["Branco", "Azul", "Preto"],
            specs: &["128GB", "Chip A15 Bionic", "Excelente Câmera"],
            description: "O clássico que nunca sai de moda. O melhor custo-benefício para entrar no mundo Apple.",
            images: ProductImages::uniform(I13),
            status: InStock,
            quantity: 5,
        },
        // Xiaomi, Poco and Realme
        Entry {
            name: "Redmi A5 3/64GB",
            category: Xiaomi,
            base: 470.0,
            price: 970.0,
            colors: &["Gold", "Azul", "Preto"],
            specs: &["3/64GB", "Bateria 5000mAh", "Tela 6.5\""],
            description: "Simplicidade e autonomia. O celular que te acompanha o dia todo sem carregar.",
            images: retail_placeholder("ra5-364"),
            status: InStock,
            quantity: 5,
        },
        Entry {
            name: "Redmi A5 4/128GB",
            category: Xiaomi,
            base: 560.0,
            price: 1060.0,
            colors: &["Preto", "Azul"],
            specs: &["4/128GB", "Design Slim", "Câmera IA"],
            description: "Mais espaço para seu dia a dia. Desempenho confiável com selo de originalidade Xiaomi.",
            images: retail_placeholder("ra5-4128"),
            status: InStock,
            quantity: 4,
        },
        Entry {
            name: "Redmi 13C 8/256GB",
            category: Xiaomi,
            base: 600.0,
            price: 1100.0,
            colors: &["Preto", "Azul", "Verde"],
            specs: &["8/256GB", "Tela 90Hz", "NFC"],
            description: "Muita memória por um preço que você não vai acreditar. Fluidez e espaço de sobra.",
            images: ProductImages::uniform(REDMI_13C),
            status: InStock,
            quantity: 3,
        },
        Entry {
            name: "Redmi 14C 8/256GB",
            category: Xiaomi,
            base: 650.0,
            price: 1150.0,
            colors: &["Preto", "Roxo", "Azul", "Verde"],
            specs: &["8/256GB", "RAM Expansível", "Hardware Premium"],
            description: "A evolução da linha Redmi. Estilo refinado e hardware potente para multitarefa.",
            images: ProductImages::uniform(REDMI_14C),
            status: InStock,
            quantity: 5,
        },
        Entry {
            name: "Redmi Note 14 8/256GB (4G)",
            category: Xiaomi,
            base: 1070.0,
            price: 1570.0,
            colors: &["Verde", "Azul", "Preto"],
            specs: &["8/256GB", "Tela AMOLED", "Câmera 108MP"],
            description: "Qualidade fotográfica de ponta. O Redmi Note 14 redefine o que é um smartphone intermediário premium.",
            images: ProductImages::uniform(REDMI_NOTE_14),
            status: InStock,
            quantity: 2,
        },
        Entry {
            name: "Poco X7 Pro 12/512GB 5G",
            category: Xiaomi,
            base: 2160.0,
            price: 2660.0,
            colors: &["Preto", "Verde"],
            specs: &["12/512GB", "Snapdragon Gamer", "Tela AMOLED 120Hz", "5G Turbo"],
            description: "Performance bruta para gamers. Sinta a velocidade do 5G com o hardware mais potente da POCO.",
            images: ProductImages::uniform(POCO_X7_PRO),
            status: LastUnits,
            quantity: 1,
        },
        Entry {
            name: "Poco X7 12/512GB 5G",
            category: Xiaomi,
            base: 1720.0,
            price: 2220.0,
            colors: &["Preto", "Verde", "Silver"],
            specs: &["12/512GB", "Processador Dimensity", "Carga de 67W"],
            description: "Equilíbrio e velocidade. O Poco X7 é o dispositivo ideal para quem busca performance sem limites.",
            images: ProductImages::uniform(POCO_X7),
            status: InStock,
            quantity: 4,
        },
        Entry {
            name: "Poco C85 8/256GB",
            category: Xiaomi,
            base: 795.0,
            price: 1295.0,
            colors: &["Preto", "Roxo", "Verde"],
            specs: &["8/256GB", "Câmera Dupla IA", "Bateria Gigante"],
            description: "O equilíbrio perfeito entre preço e poder. Grande tela e bateria infinita para seu lazer.",
            images: retail_placeholder("pc85"),
            status: InStock,
            quantity: 5,
        },
        Entry {
            name: "Realme Note 60X 4/128GB (ANATEL)",
            category: Xiaomi,
            base: 550.0,
            price: 1050.0,
            colors: &["Preto", "Verde"],
            specs: &["4/128GB", "Selo ANATEL", "1 Ano de Garantia"],
            description: "Segurança absoluta para sua compra. Homologado pela Anatel com garantia oficial Realme.",
            images: retail_placeholder("rn60x"),
            status: InStock,
            quantity: 3,
        },
        Entry {
            name: "Realme Note 60X 3/64GB (ANATEL)",
            category: Xiaomi,
            base: 450.0,
            price: 950.0,
            colors: &["Preto", "Verde"],
            specs: &["3/64GB", "Certificado Anatel", "Resistente"],
            description: "O melhor preço para um aparelho com garantia nacional. Confiabilidade e economia.",
            images: retail_placeholder("rn60x364"),
            status: InStock,
            quantity: 4,
        },
    ];

    entries.into_iter().map(Product::from).collect()
}
