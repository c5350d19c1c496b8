use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub image: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The AI-powered interview prep was a game-changer. Landed my dream job at a top tech company!",
        author: "Sarah Chen",
        image: "https://images.unsplash.com/photo-1599566150163-29194dcaad36?auto=format&fit=crop&w=80&h=80&q=80",
        role: "Software Engineer",
        company: "Tech Giant Co.",
    },
    Testimonial {
        quote: "The industry insights helped me pivot my career successfully. The salary data was spot-on!",
        author: "Michael Rodriguez",
        image: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde",
        role: "Product Manager",
        company: "StartUp Inc.",
    },
    Testimonial {
        quote: "My resume's ATS score improved significantly. Got more interviews in two weeks than in six months!",
        author: "Priyank Patel",
        image: "https://images.unsplash.com/photo-1544723795-3fb6469f5b39?auto=format&fit=crop&w=80&h=80&q=80",
        role: "Marketing Director",
        company: "Global Corp",
    },
];

/// GET /api/v1/testimonials
pub async fn handle_list_testimonials() -> Json<&'static [Testimonial]> {
    Json(TESTIMONIALS)
}
