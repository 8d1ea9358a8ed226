use std::net::SocketAddr;

pub fn show_welcome_banner(addr: &SocketAddr) {
    let welcome_message =
        "\x1b[1m\u{2708} airport-service is up\x1b[0m\n\nList airports:";

    let list_example = format!("\x1b[36mcurl http://{addr}/airports_v2\x1b[0m");

    let upload_example = format!(
        "\x1b[36mcurl --request POST \\
  --url http://{addr}/update_airport_image \\
  --form 'airport_name=Osmani International Airport' \\
  --form 'airport_img=@photo.jpg'\x1b[0m"
    );

    println!(
        "{welcome_message}\n\n{list_example}\n\nUpload an image:\n\n\
         {upload_example}\n"
    );
}
